use std::future::Future;

use tracing::warn;

use super::{ServiceError, StorageContext};
use crate::database::manager::DatabaseError;
use crate::database::models::{Contact, ContactList};
use crate::types::{Action, UserId};

/// A record that belongs to exactly one user.
pub trait OwnedResource {
    /// Name used in client messages
    const KIND: &'static str;

    fn owner_id(&self) -> UserId;
}

impl OwnedResource for Contact {
    const KIND: &'static str = "contact";

    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

impl OwnedResource for ContactList {
    const KIND: &'static str = "contact-list";

    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

/// Hand the resource back only if `caller` owns it.
pub fn check_owner<T: OwnedResource>(resource: T, caller: UserId, action: Action) -> Result<T, ServiceError> {
    if resource.owner_id() != caller {
        warn!(
            "User {} tried to {} {} owned by user {}",
            caller,
            action,
            T::KIND,
            resource.owner_id()
        );
        return Err(ServiceError::Forbidden { kind: T::KIND, action });
    }
    Ok(resource)
}

/// Load a resource and enforce ownership before any further work happens.
///
/// Absent rows become `NotFound`, foreign rows `Forbidden`; the loader is
/// called exactly once.
pub async fn load_owned<T, F, Fut>(caller: UserId, action: Action, load: F) -> Result<T, ServiceError>
where
    T: OwnedResource,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Option<T>, DatabaseError>>,
{
    let resource = load()
        .await
        .context(format!("Failed to get the {}", T::KIND))?
        .ok_or(ServiceError::NotFound(T::KIND))?;

    check_owner(resource, caller, action)
}
