// handlers/system.rs - GET / and GET /health

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Address Book API",
        "version": version,
        "endpoints": {
            "user": "/api/user, /api/user/token (public)",
            "contact": "/api/contact[/:id] (protected)",
            "contact-list": "/api/contact-list[/:id], /api/contact-list/search (protected)",
            "membership": "/api/contact-list/:id/contact (protected)",
            "health": "/health (public)",
        }
    }))
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "error": "database unavailable",
                    "status": "degraded",
                    "timestamp": now,
                    "database": e.to_string()
                })),
            )
        }
    }
}

/// Fallback for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound("Not found".to_string())
}
