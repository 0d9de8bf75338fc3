pub mod account_service;
pub mod address_book_service;
pub mod ownership;

use thiserror::Error;

use crate::auth::AuthError;
use crate::database::manager::DatabaseError;
use crate::types::Action;

pub use account_service::{AccountService, Registration, UserLookup};
pub use address_book_service::AddressBookService;
pub use ownership::{check_owner, load_owned, OwnedResource};

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request data rejected by a business rule
    #[error("{0}")]
    Invalid(String),

    #[error("Requested {0} does not exist")]
    NotFound(&'static str),

    #[error("Can't {action} {kind} belonging to another user")]
    Forbidden { kind: &'static str, action: Action },

    #[error("{context}")]
    Storage {
        context: String,
        #[source]
        source: DatabaseError,
    },

    #[error("{context}")]
    Credentials {
        context: &'static str,
        #[source]
        source: AuthError,
    },
}

/// Attach a client-facing message to a storage failure
pub(crate) trait StorageContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T, ServiceError>;
}

impl<T> StorageContext<T> for Result<T, DatabaseError> {
    fn context(self, context: impl Into<String>) -> Result<T, ServiceError> {
        self.map_err(|source| ServiceError::Storage {
            context: context.into(),
            source,
        })
    }
}
