use async_trait::async_trait;

use crate::database::manager::DatabaseError;
use crate::database::models::{Contact, ContactList, NewContact, User};
use crate::types::{RecordId, UserId};

/// Persistence operations behind the address book. Every method is a single
/// statement; nothing here checks ownership.
#[async_trait]
pub trait AddressBookStore: Send + Sync {
    async fn ping(&self) -> Result<(), DatabaseError>;

    // Users
    async fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<UserId, DatabaseError>;
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError>;

    // Contacts
    async fn create_contact(&self, owner: UserId, contact: &NewContact) -> Result<RecordId, DatabaseError>;
    async fn get_contact(&self, id: RecordId) -> Result<Option<Contact>, DatabaseError>;
    async fn delete_contact(&self, id: RecordId) -> Result<(), DatabaseError>;
    async fn contacts_by_owner(&self, owner: UserId) -> Result<Vec<Contact>, DatabaseError>;

    // Contact-lists
    async fn create_contact_list(&self, owner: UserId, name: &str) -> Result<RecordId, DatabaseError>;
    async fn get_contact_list(&self, id: RecordId) -> Result<Option<ContactList>, DatabaseError>;
    async fn delete_contact_list(&self, id: RecordId) -> Result<(), DatabaseError>;
    async fn contact_lists_by_owner(&self, owner: UserId) -> Result<Vec<ContactList>, DatabaseError>;
    /// Case-insensitive substring match on the list name
    async fn search_contact_lists(&self, owner: UserId, term: &str) -> Result<Vec<ContactList>, DatabaseError>;

    // Memberships
    async fn contacts_of_list(&self, list: RecordId) -> Result<Vec<Contact>, DatabaseError>;
    async fn add_list_entry(&self, list: RecordId, contact: RecordId) -> Result<(), DatabaseError>;
    async fn remove_list_entry(&self, list: RecordId, contact: RecordId) -> Result<(), DatabaseError>;
}
