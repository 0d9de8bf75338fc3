use std::sync::Arc;

use tracing::info;

use super::{ServiceError, StorageContext};
use crate::auth::CredentialService;
use crate::database::manager::DatabaseError;
use crate::database::models::User;
use crate::database::store::AddressBookStore;
use crate::types::UserId;

/// Validated registration input
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// How a login request identifies the account
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    Username(String),
    Email(String),
}

/// Registration and token issuance
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AddressBookStore>,
    credentials: Arc<CredentialService>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AddressBookStore>, credentials: Arc<CredentialService>) -> Self {
        Self { store, credentials }
    }

    pub async fn register(&self, registration: &Registration) -> Result<UserId, ServiceError> {
        let password_hash = self
            .credentials
            .hash_password(&registration.password)
            .await
            .map_err(|source| ServiceError::Credentials {
                context: "Failed to hash the password",
                source,
            })?;

        let created = self
            .store
            .create_user(&registration.username, &registration.email, &password_hash)
            .await;

        let id = match created {
            Err(DatabaseError::UniqueViolation(_)) => {
                return Err(ServiceError::Invalid(
                    "Username or email is already taken".to_string(),
                ))
            }
            other => other.context("Failed to create the user")?,
        };

        info!("Registered user {} ({})", registration.username, id);
        Ok(id)
    }

    /// Verify the password and return a fresh token with the user record
    /// (password hash blanked).
    pub async fn login(&self, lookup: &UserLookup, password: &str) -> Result<(String, User), ServiceError> {
        let found = match lookup {
            UserLookup::Username(username) => self.store.find_user_by_username(username).await,
            UserLookup::Email(email) => self.store.find_user_by_email(email).await,
        };
        let user = found
            .context("Failed to get the user")?
            .ok_or_else(|| ServiceError::Invalid("User does not exist".to_string()))?;

        let matches = self
            .credentials
            .verify_password(password, &user.password_hash)
            .await
            .map_err(|source| ServiceError::Credentials {
                context: "Failed to verify the password",
                source,
            })?;
        if !matches {
            return Err(ServiceError::Invalid("Wrong password".to_string()));
        }

        let token = self
            .credentials
            .issue_token(user.id)
            .map_err(|source| ServiceError::Credentials {
                context: "Failed to create token",
                source,
            })?;

        Ok((token, user.without_password()))
    }
}
