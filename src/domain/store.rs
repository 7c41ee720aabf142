use super::*;

use super::contact::{self, Contact};
use super::search;
use tracing::{debug, warn};

/// Owns the contact collection and mirrors it to a durable slot.
///
/// Every mutation is staged on a copy of the collection, written to the slot
/// in full, and only then committed to memory. A failed write therefore
/// leaves the store exactly as it was before the call. Callers only ever
/// receive owned snapshots.
pub struct ContactStore {
    mem: Vec<Contact>,
    storage: Box<dyn StorageSlot>,
}

impl ContactStore {
    /// Empty store bound to `storage`. Nothing is read until [`load`](Self::load).
    pub fn new(storage: Box<dyn StorageSlot>) -> Self {
        Self {
            mem: Vec::new(),
            storage,
        }
    }

    /// Binds to `storage` and loads it. Unreadable or corrupt data is logged
    /// and the store starts empty.
    pub fn open(storage: Box<dyn StorageSlot>) -> Self {
        let mut store = Self::new(storage);

        if let Err(e) = store.load() {
            warn!(
                medium = store.storage.get_medium(),
                error = %e,
                "could not load stored contacts, starting with an empty list"
            );
        }
        store
    }

    pub fn load(&mut self) -> Result<Vec<Contact>, AppError> {
        let loaded = match self.storage.read() {
            Ok(Some(bytes)) => codec::deserialize_contacts(&bytes),
            Ok(None) => Ok(Vec::new()),
            Err(e) => Err(e),
        };

        match loaded {
            Ok(contacts) => {
                debug!(
                    medium = self.storage.get_medium(),
                    count = contacts.len(),
                    "loaded contacts"
                );
                self.mem = contacts;
                Ok(self.mem.clone())
            }
            Err(e) => {
                self.mem.clear();
                Err(e)
            }
        }
    }

    pub fn create(
        &mut self,
        name: &str,
        phone: &str,
        image: Option<&str>,
    ) -> Result<Contact, AppError> {
        let new_contact = Contact::new(
            self.next_id(),
            name.to_string(),
            phone.to_string(),
            image.map(str::to_string),
        );
        new_contact.validate()?;

        let mut staged = self.mem.clone();
        staged.push(new_contact.clone());
        self.commit(staged)?;

        debug!(id = %new_contact.id, "contact created");
        Ok(new_contact)
    }

    pub fn update(
        &mut self,
        id: &str,
        name: &str,
        phone: &str,
        image: Option<&str>,
    ) -> Result<Contact, AppError> {
        let position = self
            .mem
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Contact with id '{}'", id)))?;

        let updated = Contact::new(
            id.to_string(),
            name.to_string(),
            phone.to_string(),
            image.map(str::to_string),
        );
        updated.validate()?;

        let mut staged = self.mem.clone();
        staged[position] = updated.clone();
        self.commit(staged)?;

        debug!(id = %updated.id, position, "contact updated");
        Ok(updated)
    }

    /// Removes the contact with `id`. Unknown ids are not an error; the
    /// collection is persisted either way.
    pub fn delete(&mut self, id: &str) -> Result<(), AppError> {
        let staged: Vec<Contact> = self.mem.iter().filter(|c| c.id != id).cloned().collect();
        let removed = self.mem.len() - staged.len();

        self.commit(staged)?;

        debug!(id, removed, "contact delete applied");
        Ok(())
    }

    pub fn search(&self, query: &str) -> Vec<Contact> {
        search::filter_by_name(&self.mem, query)
            .into_iter()
            .cloned()
            .collect()
    }

    fn commit(&mut self, staged: Vec<Contact>) -> Result<(), AppError> {
        let bytes = codec::serialize_contacts(&staged)?;
        self.storage.write(&bytes)?;

        self.mem = staged;
        Ok(())
    }

    fn next_id(&self) -> String {
        loop {
            let id = contact::new_contact_id();
            if !self.mem.iter().any(|c| c.id == id) {
                return id;
            }
        }
    }
}
