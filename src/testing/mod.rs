//! In-memory `AddressBookStore` used by the test suites and for running the
//! API without PostgreSQL. It mirrors the constraints declared in
//! `schema.sql`: serial ids starting at 1, unique usernames/emails, one entry
//! per (list, contact) pair and cascading entry removal.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::database::manager::DatabaseError;
use crate::database::models::{Contact, ContactList, NewContact, User};
use crate::database::store::AddressBookStore;
use crate::types::{RecordId, UserId};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    contacts: Vec<Contact>,
    contact_lists: Vec<ContactList>,
    entries: Vec<(RecordId, RecordId)>,
    next_user_id: UserId,
    next_contact_id: RecordId,
    next_contact_list_id: RecordId,
}

fn next_id(counter: &mut i32) -> i32 {
    *counter += 1;
    *counter
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AddressBookStore for MemoryStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }

    async fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<UserId, DatabaseError> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.username == username) {
            return Err(DatabaseError::UniqueViolation("users_username_key".to_string()));
        }
        if tables.users.iter().any(|u| u.email == email) {
            return Err(DatabaseError::UniqueViolation("users_email_key".to_string()));
        }

        let id = next_id(&mut tables.next_user_id);
        tables.users.push(User {
            id,
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        });
        Ok(id)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn create_contact(&self, owner: UserId, contact: &NewContact) -> Result<RecordId, DatabaseError> {
        let mut tables = self.tables.write().await;
        let id = next_id(&mut tables.next_contact_id);
        tables.contacts.push(Contact {
            id,
            user_id: owner,
            name: contact.name.clone(),
            surname: contact.surname.clone(),
            email: contact.email.clone(),
        });
        Ok(id)
    }

    async fn get_contact(&self, id: RecordId) -> Result<Option<Contact>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables.contacts.iter().find(|c| c.id == id).cloned())
    }

    async fn delete_contact(&self, id: RecordId) -> Result<(), DatabaseError> {
        let mut tables = self.tables.write().await;
        tables.contacts.retain(|c| c.id != id);
        tables.entries.retain(|&(_, contact)| contact != id);
        Ok(())
    }

    async fn contacts_by_owner(&self, owner: UserId) -> Result<Vec<Contact>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables.contacts.iter().filter(|c| c.user_id == owner).cloned().collect())
    }

    async fn create_contact_list(&self, owner: UserId, name: &str) -> Result<RecordId, DatabaseError> {
        let mut tables = self.tables.write().await;
        let id = next_id(&mut tables.next_contact_list_id);
        tables.contact_lists.push(ContactList {
            id,
            user_id: owner,
            name: name.to_string(),
        });
        Ok(id)
    }

    async fn get_contact_list(&self, id: RecordId) -> Result<Option<ContactList>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables.contact_lists.iter().find(|l| l.id == id).cloned())
    }

    async fn delete_contact_list(&self, id: RecordId) -> Result<(), DatabaseError> {
        let mut tables = self.tables.write().await;
        tables.contact_lists.retain(|l| l.id != id);
        tables.entries.retain(|&(list, _)| list != id);
        Ok(())
    }

    async fn contact_lists_by_owner(&self, owner: UserId) -> Result<Vec<ContactList>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables.contact_lists.iter().filter(|l| l.user_id == owner).cloned().collect())
    }

    async fn search_contact_lists(&self, owner: UserId, term: &str) -> Result<Vec<ContactList>, DatabaseError> {
        let term = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .contact_lists
            .iter()
            .filter(|l| l.user_id == owner && l.name.to_lowercase().contains(&term))
            .cloned()
            .collect())
    }

    async fn contacts_of_list(&self, list: RecordId) -> Result<Vec<Contact>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables
            .contacts
            .iter()
            .filter(|c| tables.entries.contains(&(list, c.id)))
            .cloned()
            .collect())
    }

    async fn add_list_entry(&self, list: RecordId, contact: RecordId) -> Result<(), DatabaseError> {
        let mut tables = self.tables.write().await;
        if tables.entries.contains(&(list, contact)) {
            return Err(DatabaseError::UniqueViolation("contact_list_entries_pkey".to_string()));
        }
        tables.entries.push((list, contact));
        Ok(())
    }

    async fn remove_list_entry(&self, list: RecordId, contact: RecordId) -> Result<(), DatabaseError> {
        let mut tables = self.tables.write().await;
        tables.entries.retain(|&entry| entry != (list, contact));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str) -> NewContact {
        NewContact {
            name: name.to_string(),
            surname: "surname".to_string(),
            email: format!("{}@mail.com", name),
        }
    }

    #[tokio::test]
    async fn enforces_unique_usernames_and_emails() {
        let store = MemoryStore::new();
        assert_eq!(store.create_user("user", "a@mail.com", "h").await.unwrap(), 1);

        assert!(matches!(
            store.create_user("user", "b@mail.com", "h").await,
            Err(DatabaseError::UniqueViolation(_))
        ));
        assert!(matches!(
            store.create_user("other", "a@mail.com", "h").await,
            Err(DatabaseError::UniqueViolation(_))
        ));
        assert_eq!(store.create_user("other", "b@mail.com", "h").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn deleting_a_contact_drops_its_entries() {
        let store = MemoryStore::new();
        let contact_id = store.create_contact(1, &contact("anna")).await.unwrap();
        let list_id = store.create_contact_list(1, "friends").await.unwrap();
        store.add_list_entry(list_id, contact_id).await.unwrap();

        store.delete_contact(contact_id).await.unwrap();

        assert!(store.contacts_of_list(list_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_entries_conflict() {
        let store = MemoryStore::new();
        store.add_list_entry(1, 1).await.unwrap();
        assert!(matches!(
            store.add_list_entry(1, 1).await,
            Err(DatabaseError::UniqueViolation(_))
        ));
    }

    #[tokio::test]
    async fn search_is_case_insensitive_and_owner_scoped() {
        let store = MemoryStore::new();
        store.create_contact_list(1, "Work Friends").await.unwrap();
        store.create_contact_list(1, "Family").await.unwrap();
        store.create_contact_list(2, "friends of bob").await.unwrap();

        let found = store.search_contact_lists(1, "FRIEND").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Work Friends");
    }
}
