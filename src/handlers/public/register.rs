// handlers/public/register.rs - POST /api/user handler

use axum::extract::State;
use serde::Deserialize;

use crate::error::ApiError;
use crate::handlers::validate;
use crate::middleware::{ApiJson, ApiResponse, ApiResult, Created};
use crate::services::Registration;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    fn validate(self) -> Result<Registration, ApiError> {
        validate::require("Username", &self.username)?;
        validate::require("Email", &self.email)?;
        validate::require("Password", &self.password)?;
        validate::email(&self.email)?;
        validate::password(&self.password)?;

        Ok(Registration {
            username: self.username,
            email: self.email,
            password: self.password,
        })
    }
}

/// POST /api/user - register an account, answering `{"id": n}`
pub async fn register_post(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> ApiResult<Created> {
    let registration = body.validate()?;
    let id = state.accounts.register(&registration).await?;
    Ok(ApiResponse::success(Created { id }))
}
