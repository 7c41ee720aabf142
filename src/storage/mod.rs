pub mod codec;
pub mod file;
pub mod memory;

use crate::errors::AppError;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_STORAGE_PATH: &str = "./.instance/contacts.json";

/// A single durable value holding the whole serialized contact collection.
pub trait StorageSlot {
    /// Returns `None` when nothing has ever been written to the slot.
    fn read(&self) -> Result<Option<Vec<u8>>, AppError>;

    fn write(&self, bytes: &[u8]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Mem,
    Json,
}

impl StorageMediums {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMediums::Json)
    }

    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMediums::Mem)
    }

    pub fn is_which(&self) -> &str {
        if self.is_json() { "json" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(StorageMediums::Json),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(format!(
                "Not a recognized storage medium: '{}' (expected json or mem)",
                str
            ))),
        }
    }
}

/// Builds the slot for `medium`. `path` is only used by the json medium and
/// falls back to [`DEFAULT_STORAGE_PATH`].
pub fn parse_storage_slot(
    medium: StorageMediums,
    path: Option<PathBuf>,
) -> Result<Box<dyn StorageSlot>, AppError> {
    match medium {
        StorageMediums::Json => {
            let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH));
            Ok(Box::new(file::JsonFileSlot::new(path)))
        }
        StorageMediums::Mem => Ok(Box::new(memory::MemorySlot::new())),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
