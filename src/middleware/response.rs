use axum::{
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::ApiError;
use crate::types::RecordId;

/// Successful handler output: a JSON document or an empty 200 body.
#[derive(Debug)]
pub enum ApiResponse<T: Serialize> {
    Json(T),
    Empty,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse::Json(data)
    }

    /// Deletions and membership changes answer with no content
    pub fn empty() -> Self {
        ApiResponse::Empty
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let data = match self {
            ApiResponse::Empty => return StatusCode::OK.into_response(),
            ApiResponse::Json(data) => data,
        };

        match serde_json::to_vec(&data) {
            Ok(body) => (StatusCode::OK, [(CONTENT_TYPE, "application/json")], body).into_response(),
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                ApiError::internal_server_error("Failed to marshal the result to JSON").into_response()
            }
        }
    }
}

/// Body returned by every create endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Created {
    pub id: RecordId,
}

pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;
