use std::sync::Arc;

use crate::auth::CredentialService;
use crate::database::store::AddressBookStore;
use crate::services::{AccountService, AddressBookService};

/// Handles shared by every request. Built once in `main` (or a test) and
/// cloned into the router; nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AddressBookStore>,
    pub credentials: Arc<CredentialService>,
    pub accounts: AccountService,
    pub address_book: AddressBookService,
}

impl AppState {
    pub fn new(store: Arc<dyn AddressBookStore>, credentials: Arc<CredentialService>) -> Self {
        Self {
            accounts: AccountService::new(store.clone(), credentials.clone()),
            address_book: AddressBookService::new(store.clone()),
            store,
            credentials,
        }
    }
}
