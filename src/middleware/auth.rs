use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::UserId;

/// Authenticated caller, injected into request extensions by `jwt_auth_middleware`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: UserId,
}

/// Resolve the bearer token before dispatch; protected handlers only ever
/// see requests that carry a valid caller id.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let user_id = state.credentials.parse_token(header)?;
    tracing::debug!("Authenticated request from user {}", user_id);

    request.extensions_mut().insert(AuthUser { user_id });

    Ok(next.run(request).await)
}
