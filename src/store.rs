//! Contact store collaborator seam.
//!
//! The import path never mutates storage; the only query it needs is a
//! point-in-time duplicate lookup. Callers hand the engine whatever store
//! they have behind this trait.

use crate::models::Contact;

/// Read-only duplicate lookup over an existing contact set.
///
/// Snapshot semantics are acceptable: a contact added concurrently while an
/// import is running is not required to be detected as a duplicate.
pub trait ContactStore {
    /// Returns true if a structurally equal contact already exists.
    fn contains(&self, contact: &Contact) -> bool;
}

/// A plain in-memory contact store.
///
/// Used by the CLI and in tests; production callers typically adapt their
/// own storage to [`ContactStore`] instead.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    contacts: Vec<Contact>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }

    /// Creates a store seeded with the given contacts.
    #[must_use]
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// Adds a contact to the store.
    pub fn add(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Returns the stored contacts.
    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }
}

impl ContactStore for InMemoryStore {
    fn contains(&self, contact: &Contact) -> bool {
        self.contacts.iter().any(|c| c == contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use std::collections::BTreeSet;

    fn contact(name: &str) -> Contact {
        Contact {
            name: name.to_string(),
            phone: "5551234".to_string(),
            email: "a@b.com".to_string(),
            address: "Somewhere".to_string(),
            role: Role::Lead,
            tags: BTreeSet::new(),
            cadence: None,
            interactions: Vec::new(),
        }
    }

    #[test]
    fn test_contains_is_structural() {
        let store = InMemoryStore::with_contacts(vec![contact("Ada")]);
        assert!(store.contains(&contact("Ada")));
        assert!(!store.contains(&contact("Grace")));
    }
}
