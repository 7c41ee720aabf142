use super::contact::Contact;

/// Contacts whose name contains `query`, ignoring case, in their stored order.
///
/// An empty query matches every contact.
pub fn filter_by_name<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    if query.is_empty() {
        return contacts.iter().collect();
    }

    let query = query.to_lowercase();

    contacts
        .iter()
        .filter(|contact| contact.name.to_lowercase().contains(&query))
        .collect()
}
