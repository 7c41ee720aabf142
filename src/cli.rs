pub mod command;
pub mod image;
pub mod run;

pub use run::run_app;

use crate::domain::contact::Contact;
use crate::errors::AppError;
use std::io::{self, BufRead, Write};

pub fn confirm_action(action: &str) -> Result<(), AppError> {
    println!("\nAre you sure you want to {}? (y/n)", action);
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

/// One listing row. Contacts without a photo show the default avatar.
pub fn display_contact(index: usize, contact: &Contact) -> String {
    let image = match contact.image.as_deref() {
        Some(uri) if contact.has_image() => uri,
        _ => "(default avatar)",
    };
    format!(
        "{index:>3}. {:<20} {:<15} {:<38} {}",
        contact.name, contact.phone, contact.id, image
    )
}

pub fn display_contacts(contacts: &[Contact]) {
    for (i, contact) in contacts.iter().enumerate() {
        println!("{}", display_contact(i + 1, contact));
    }
}

// INPUT FUNCTIONS
pub fn get_input_to_lower(reader: &mut impl BufRead) -> Result<String, AppError> {
    let mut input = String::new();
    reader.read_line(&mut input)?;
    Ok(input.trim().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_row_shows_default_avatar() {
        let contact = Contact::new(
            "42".to_string(),
            "Ana".to_string(),
            "555-1".to_string(),
            None,
        );

        let row = display_contact(1, &contact);
        assert!(row.starts_with("  1. Ana"));
        assert!(row.ends_with("(default avatar)"));
    }

    #[test]
    fn blank_stored_image_shows_default_avatar() -> Result<(), AppError> {
        let contact: Contact = serde_json::from_str(
            r#"{"id":"42","name":"Ana","phone":"555-1","image":"  "}"#,
        )?;

        assert!(!contact.has_image());
        assert!(display_contact(1, &contact).ends_with("(default avatar)"));
        Ok(())
    }

    #[test]
    fn reads_answer_lowercased() -> Result<(), AppError> {
        let mut input = io::Cursor::new("  Y \n");

        assert_eq!(get_input_to_lower(&mut input)?, "y");
        Ok(())
    }
}
