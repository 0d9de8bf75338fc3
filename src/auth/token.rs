use std::collections::HashSet;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::AuthError;
use crate::types::UserId;

/// Claims carried by every bearer token. Tokens do not expire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userID")]
    pub user_id: UserId,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            iat: Utc::now().timestamp(),
        }
    }
}

pub(super) struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenKeys {
    pub(super) fn from_secret(secret: &str) -> Result<Self, AuthError> {
        if secret.is_empty() {
            return Err(AuthError::InvalidSecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims = HashSet::new();

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    pub(super) fn encode(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| AuthError::TokenGeneration(e.to_string()))
    }

    pub(super) fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Rejected bearer token: {}", e);
                AuthError::InvalidToken
            })
    }
}

/// Extract the token from `Bearer <token>`. Anything else counts as missing.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingToken)?;
    let mut fields = header.split_whitespace();

    match (fields.next(), fields.next(), fields.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(AuthError::MissingToken),
    }
}
