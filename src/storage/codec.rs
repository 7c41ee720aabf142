use super::*;

use crate::domain::contact::Contact;
use std::collections::HashSet;
use tracing::warn;

pub fn serialize_contacts(contacts: &[Contact]) -> Result<Vec<u8>, AppError> {
    Ok(serde_json::to_vec(contacts)?)
}

/// Parses a persisted collection. Only a payload that is not an array of
/// contacts, or one where an id repeats, is rejected. Records with a blank
/// name or phone are kept as they are.
pub fn deserialize_contacts(bytes: &[u8]) -> Result<Vec<Contact>, AppError> {
    // serde_json will give an error if data is empty
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(Vec::new());
    }

    let contacts: Vec<Contact> = serde_json::from_slice(bytes)?;

    let mut seen: HashSet<&str> = HashSet::with_capacity(contacts.len());
    for contact in &contacts {
        if !seen.insert(contact.id.as_str()) {
            return Err(AppError::Persistence(format!(
                "duplicate contact id '{}' in stored data",
                contact.id
            )));
        }

        if let Err(e) = contact.validate() {
            warn!(id = %contact.id, error = %e, "stored contact has a blank field");
        }
    }

    Ok(contacts)
}
