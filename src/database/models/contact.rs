use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::{RecordId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Contact {
    pub id: RecordId,
    #[serde(rename = "userID")]
    pub user_id: UserId,
    pub name: String,
    pub surname: String,
    pub email: String,
}

/// Validated input for a contact insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub surname: String,
    pub email: String,
}
