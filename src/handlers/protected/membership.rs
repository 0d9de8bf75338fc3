// handlers/protected/membership.rs - /api/contact-list/:id/contact handlers

use axum::extract::{Path, State};
use axum::Extension;
use serde::Deserialize;

use crate::database::models::Contact;
use crate::handlers::validate;
use crate::middleware::{ApiJson, ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MembershipRequest {
    pub id: u32,
}

/// GET /api/contact-list/:id/contact
pub async fn list_contacts_get(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<Vec<Contact>> {
    let list_id = validate::parse_id(&id)?;
    let contacts = state.address_book.contacts_of_list(auth.user_id, list_id).await?;
    Ok(ApiResponse::success(contacts))
}

/// POST /api/contact-list/:id/contact - body `{"id": <contact id>}`
pub async fn list_contact_post(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<MembershipRequest>,
) -> ApiResult<()> {
    let contact_id = validate::body_id(body.id)?;
    let list_id = validate::parse_id(&id)?;

    state.address_book.add_to_list(auth.user_id, list_id, contact_id).await?;
    Ok(ApiResponse::empty())
}

/// DELETE /api/contact-list/:id/contact - body `{"id": <contact id>}`
pub async fn list_contact_delete(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<MembershipRequest>,
) -> ApiResult<()> {
    let contact_id = validate::body_id(body.id)?;
    let list_id = validate::parse_id(&id)?;

    state.address_book.remove_from_list(auth.user_id, list_id, contact_id).await?;
    Ok(ApiResponse::empty())
}
