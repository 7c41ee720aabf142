use super::*;

use std::cell::RefCell;
use std::rc::Rc;

/// Slot backed by process memory. Clones share the same bytes, so a caller
/// can keep a handle on what a store has written.
#[derive(Clone, Default)]
pub struct MemorySlot {
    data: Rc<RefCell<Option<Vec<u8>>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot that already holds `bytes`, as if written by an earlier run.
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Rc::new(RefCell::new(Some(bytes.into()))),
        }
    }

    pub fn bytes(&self) -> Option<Vec<u8>> {
        self.data.borrow().clone()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<Vec<u8>>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn write(&self, bytes: &[u8]) -> Result<(), AppError> {
        *self.data.borrow_mut() = Some(bytes.to_vec());
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
