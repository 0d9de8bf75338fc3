use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor that answers decode failures with the API's own
/// `{"error": ...}` shape. The `Content-Type` header is not required.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::bad_request("Request body couldn't be parsed as JSON"))?;

        serde_json::from_slice(&bytes).map(ApiJson).map_err(|e| {
            tracing::debug!("Rejected request body: {}", e);
            ApiError::bad_request("Request body couldn't be parsed as JSON")
        })
    }
}
