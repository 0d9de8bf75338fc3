use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    /// bcrypt hash; never leaves the server non-empty
    #[serde(rename = "password")]
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

impl User {
    pub fn without_password(mut self) -> Self {
        self.password_hash.clear();
        self
    }
}
