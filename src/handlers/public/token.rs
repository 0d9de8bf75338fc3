// handlers/public/token.rs - POST /api/user/token handler

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::database::models::User;
use crate::error::ApiError;
use crate::handlers::validate;
use crate::middleware::{ApiJson, ApiResponse, ApiResult};
use crate::services::UserLookup;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TokenRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub user: User,
}

impl TokenRequest {
    /// Username wins when both identifiers are supplied
    fn lookup(&self) -> Result<UserLookup, ApiError> {
        match (self.username.is_empty(), self.email.is_empty()) {
            (false, _) => Ok(UserLookup::Username(self.username.clone())),
            (true, false) => Ok(UserLookup::Email(self.email.clone())),
            (true, true) => Err(ApiError::bad_request(
                "Username and email fields are missing, at least one is required",
            )),
        }
    }
}

/// POST /api/user/token - exchange credentials for a bearer token
pub async fn token_post(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<TokenRequest>,
) -> ApiResult<TokenResponse> {
    let lookup = body.lookup()?;
    validate::require("Password", &body.password)?;

    let (token, user) = state.accounts.login(&lookup, &body.password).await?;
    Ok(ApiResponse::success(TokenResponse { token, user }))
}
