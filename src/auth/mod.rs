pub mod password;
pub mod token;

use thiserror::Error;

use crate::config::SecurityConfig;
use crate::types::UserId;

pub use token::Claims;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Token is missing")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Failed to hash the password: {0}")]
    Hashing(String),

    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid JWT secret")]
    InvalidSecret,
}

/// Password hashing and bearer-token handling, built once at startup from
/// the security configuration and shared read-only between requests.
pub struct CredentialService {
    keys: token::TokenKeys,
    bcrypt_cost: u32,
}

impl CredentialService {
    pub fn new(jwt_secret: &str, bcrypt_cost: u32) -> Result<Self, AuthError> {
        Ok(Self {
            keys: token::TokenKeys::from_secret(jwt_secret)?,
            bcrypt_cost,
        })
    }

    pub fn from_config(security: &SecurityConfig) -> Result<Self, AuthError> {
        Self::new(&security.jwt_secret, security.bcrypt_cost)
    }

    pub async fn hash_password(&self, plain: &str) -> Result<String, AuthError> {
        password::hash_password(plain, self.bcrypt_cost).await
    }

    pub async fn verify_password(&self, plain: &str, hash: &str) -> Result<bool, AuthError> {
        password::verify_password(plain, hash).await
    }

    pub fn issue_token(&self, user_id: UserId) -> Result<String, AuthError> {
        self.keys.encode(&Claims::new(user_id))
    }

    /// Resolve the caller from an `Authorization` header value.
    pub fn parse_token(&self, header: Option<&str>) -> Result<UserId, AuthError> {
        let token = token::bearer_token(header)?;
        let claims = self.keys.decode(token)?;
        Ok(claims.user_id)
    }
}
