/// Shared types used across the codebase

use serde::{Deserialize, Serialize};

/// Identifier of a row in `users`
pub type UserId = i32;

/// Identifier of a row in `contacts` or `contact_lists`
pub type RecordId = i32;

/// Operations a caller can attempt on an owned resource.
/// Used by the ownership check to build its rejection message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Fetch,
    Delete,
    Modify,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Fetch => write!(f, "fetch"),
            Action::Delete => write!(f, "delete"),
            Action::Modify => write!(f, "modify"),
        }
    }
}
