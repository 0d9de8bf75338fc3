use std::sync::Arc;

use super::ownership::load_owned;
use super::{ServiceError, StorageContext};
use crate::database::manager::DatabaseError;
use crate::database::models::{Contact, ContactList, NewContact};
use crate::database::store::AddressBookStore;
use crate::types::{Action, RecordId, UserId};

/// Contact and contact-list operations on behalf of an authenticated caller.
/// Every single-resource operation goes through `load_owned` first.
#[derive(Clone)]
pub struct AddressBookService {
    store: Arc<dyn AddressBookStore>,
}

impl AddressBookService {
    pub fn new(store: Arc<dyn AddressBookStore>) -> Self {
        Self { store }
    }

    async fn owned_contact(&self, caller: UserId, id: RecordId, action: Action) -> Result<Contact, ServiceError> {
        load_owned(caller, action, || self.store.get_contact(id)).await
    }

    async fn owned_list(&self, caller: UserId, id: RecordId, action: Action) -> Result<ContactList, ServiceError> {
        load_owned(caller, action, || self.store.get_contact_list(id)).await
    }

    // Contacts

    pub async fn create_contact(&self, caller: UserId, contact: &NewContact) -> Result<RecordId, ServiceError> {
        self.store
            .create_contact(caller, contact)
            .await
            .context("Failed to create the contact")
    }

    pub async fn contacts(&self, caller: UserId) -> Result<Vec<Contact>, ServiceError> {
        self.store
            .contacts_by_owner(caller)
            .await
            .context("Failed to get the contacts")
    }

    pub async fn contact(&self, caller: UserId, id: RecordId) -> Result<Contact, ServiceError> {
        self.owned_contact(caller, id, Action::Fetch).await
    }

    pub async fn delete_contact(&self, caller: UserId, id: RecordId) -> Result<(), ServiceError> {
        let contact = self.owned_contact(caller, id, Action::Delete).await?;
        self.store
            .delete_contact(contact.id)
            .await
            .context("Failed to delete the contact")
    }

    // Contact-lists

    pub async fn create_contact_list(&self, caller: UserId, name: &str) -> Result<RecordId, ServiceError> {
        self.store
            .create_contact_list(caller, name)
            .await
            .context("Failed to create the contact-list")
    }

    pub async fn contact_lists(&self, caller: UserId) -> Result<Vec<ContactList>, ServiceError> {
        self.store
            .contact_lists_by_owner(caller)
            .await
            .context("Failed to get the contact-lists")
    }

    pub async fn contact_list(&self, caller: UserId, id: RecordId) -> Result<ContactList, ServiceError> {
        self.owned_list(caller, id, Action::Fetch).await
    }

    pub async fn delete_contact_list(&self, caller: UserId, id: RecordId) -> Result<(), ServiceError> {
        let list = self.owned_list(caller, id, Action::Delete).await?;
        self.store
            .delete_contact_list(list.id)
            .await
            .context("Failed to delete the contact-list")
    }

    pub async fn search_contact_lists(&self, caller: UserId, term: &str) -> Result<Vec<ContactList>, ServiceError> {
        self.store
            .search_contact_lists(caller, term)
            .await
            .context("Failed to search the contact-lists")
    }

    // Memberships

    pub async fn contacts_of_list(&self, caller: UserId, list_id: RecordId) -> Result<Vec<Contact>, ServiceError> {
        let list = self.owned_list(caller, list_id, Action::Fetch).await?;
        self.store
            .contacts_of_list(list.id)
            .await
            .context("Failed to fetch contacts")
    }

    pub async fn add_to_list(
        &self,
        caller: UserId,
        list_id: RecordId,
        contact_id: RecordId,
    ) -> Result<(), ServiceError> {
        let list = self.owned_list(caller, list_id, Action::Modify).await?;
        let contact = self.owned_contact(caller, contact_id, Action::Modify).await?;

        match self.store.add_list_entry(list.id, contact.id).await {
            Err(DatabaseError::UniqueViolation(_)) => Err(ServiceError::Invalid(
                "Contact is already in the contact-list".to_string(),
            )),
            other => other.context("Failed to add contact to contact-list"),
        }
    }

    pub async fn remove_from_list(
        &self,
        caller: UserId,
        list_id: RecordId,
        contact_id: RecordId,
    ) -> Result<(), ServiceError> {
        let list = self.owned_list(caller, list_id, Action::Modify).await?;
        let contact = self.owned_contact(caller, contact_id, Action::Modify).await?;

        self.store
            .remove_list_entry(list.id, contact.id)
            .await
            .context("Failed to remove contact from contact-list")
    }
}
