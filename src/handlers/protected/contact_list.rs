// handlers/protected/contact_list.rs - /api/contact-list handlers

use axum::extract::{Path, State};
use axum::Extension;
use serde::Deserialize;

use crate::database::models::ContactList;
use crate::handlers::validate;
use crate::middleware::{ApiJson, ApiResponse, ApiResult, AuthUser, Created};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateContactListRequest {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub term: String,
}

/// POST /api/contact-list
pub async fn contact_list_post(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    ApiJson(body): ApiJson<CreateContactListRequest>,
) -> ApiResult<Created> {
    validate::require("Name", &body.name)?;
    let id = state.address_book.create_contact_list(auth.user_id, &body.name).await?;
    Ok(ApiResponse::success(Created { id }))
}

/// GET /api/contact-list
pub async fn contact_lists_get(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Vec<ContactList>> {
    let lists = state.address_book.contact_lists(auth.user_id).await?;
    Ok(ApiResponse::success(lists))
}

/// GET /api/contact-list/:id
pub async fn contact_list_get(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<ContactList> {
    let id = validate::parse_id(&id)?;
    let list = state.address_book.contact_list(auth.user_id, id).await?;
    Ok(ApiResponse::success(list))
}

/// DELETE /api/contact-list/:id - entries go with the list
pub async fn contact_list_delete(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let id = validate::parse_id(&id)?;
    state.address_book.delete_contact_list(auth.user_id, id).await?;
    Ok(ApiResponse::empty())
}

/// POST /api/contact-list/search - substring match on the caller's list names
pub async fn contact_list_search_post(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    ApiJson(body): ApiJson<SearchRequest>,
) -> ApiResult<Vec<ContactList>> {
    validate::require("Term", &body.term)?;
    let lists = state.address_book.search_contact_lists(auth.user_id, &body.term).await?;
    Ok(ApiResponse::success(lists))
}
