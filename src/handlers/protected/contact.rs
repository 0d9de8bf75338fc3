// handlers/protected/contact.rs - /api/contact handlers

use axum::extract::{Path, State};
use axum::Extension;
use serde::Deserialize;

use crate::database::models::{Contact, NewContact};
use crate::error::ApiError;
use crate::handlers::validate;
use crate::middleware::{ApiJson, ApiResponse, ApiResult, AuthUser, Created};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateContactRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
}

impl CreateContactRequest {
    fn validate(self) -> Result<NewContact, ApiError> {
        validate::require("Name", &self.name)?;
        validate::require("Surname", &self.surname)?;
        validate::require("Email", &self.email)?;
        validate::email(&self.email)?;

        Ok(NewContact {
            name: self.name,
            surname: self.surname,
            email: self.email,
        })
    }
}

/// POST /api/contact
pub async fn contact_post(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    ApiJson(body): ApiJson<CreateContactRequest>,
) -> ApiResult<Created> {
    let contact = body.validate()?;
    let id = state.address_book.create_contact(auth.user_id, &contact).await?;
    Ok(ApiResponse::success(Created { id }))
}

/// GET /api/contact - every contact the caller owns
pub async fn contacts_get(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Vec<Contact>> {
    let contacts = state.address_book.contacts(auth.user_id).await?;
    Ok(ApiResponse::success(contacts))
}

/// GET /api/contact/:id
pub async fn contact_get(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<Contact> {
    let id = validate::parse_id(&id)?;
    let contact = state.address_book.contact(auth.user_id, id).await?;
    Ok(ApiResponse::success(contact))
}

/// DELETE /api/contact/:id
pub async fn contact_delete(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let id = validate::parse_id(&id)?;
    state.address_book.delete_contact(auth.user_id, id).await?;
    Ok(ApiResponse::empty())
}
