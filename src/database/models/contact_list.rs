use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::{RecordId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ContactList {
    pub id: RecordId,
    #[serde(rename = "userID")]
    pub user_id: UserId,
    pub name: String,
}
