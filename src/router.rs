use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{protected, public, system};
use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

/// Build the full application router. `cors_origins` of `["*"]` (or empty)
/// allows any origin.
pub fn app(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        // Public
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .merge(user_routes())
        // Protected API
        .merge(protected_routes(state.clone()))
        .fallback(system::not_found)
        // Global middleware
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn user_routes() -> Router<AppState> {
    use public::{register_post, token_post};

    Router::new()
        .route("/api/user", post(register_post))
        .route("/api/user/token", post(token_post))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    use protected::{contact, contact_list, membership};

    Router::new()
        .route("/api/contact", get(contact::contacts_get).post(contact::contact_post))
        .route(
            "/api/contact/:id",
            get(contact::contact_get).delete(contact::contact_delete),
        )
        .route(
            "/api/contact-list",
            get(contact_list::contact_lists_get).post(contact_list::contact_list_post),
        )
        // Static segment wins over `:id`
        .route("/api/contact-list/search", post(contact_list::contact_list_search_post))
        .route(
            "/api/contact-list/:id",
            get(contact_list::contact_list_get).delete(contact_list::contact_list_delete),
        )
        .route(
            "/api/contact-list/:id/contact",
            get(membership::list_contacts_get)
                .post(membership::list_contact_post)
                .delete(membership::list_contact_delete),
        )
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ]);

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::auth::CredentialService;
    use crate::testing::MemoryStore;

    fn test_app() -> (Router, Arc<CredentialService>) {
        let credentials = Arc::new(CredentialService::new("secret", 4).unwrap());
        let state = AppState::new(Arc::new(MemoryStore::new()), credentials.clone());
        (app(state, &["*".to_string()]), credentials)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    fn json_request(method: &str, uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn protected_route_without_token_is_unauthorized() {
        let (app, _) = test_app();
        let (status, body) = send(&app, json_request("GET", "/api/contact", None, "")).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({ "error": "Token is missing" }));
    }

    #[tokio::test]
    async fn auth_is_checked_before_the_body() {
        let (app, _) = test_app();
        let (status, _) = send(&app, json_request("POST", "/api/contact", None, "not json")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let (app, credentials) = test_app();
        let token = credentials.issue_token(1).unwrap();
        let (status, body) = send(&app, json_request("POST", "/api/contact", Some(&token), "{")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Request body couldn't be parsed as JSON"));
    }

    #[tokio::test]
    async fn unparsable_path_id_is_rejected() {
        let (app, credentials) = test_app();
        let token = credentials.issue_token(1).unwrap();
        let (status, body) = send(&app, json_request("GET", "/api/contact/abc", Some(&token), "")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Provided ID can't be parsed as an integer"));
    }

    #[tokio::test]
    async fn search_is_not_captured_by_the_id_route() {
        let (app, credentials) = test_app();
        let token = credentials.issue_token(1).unwrap();
        let (status, body) = send(
            &app,
            json_request("POST", "/api/contact-list/search", Some(&token), r#"{"term":"x"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn deletion_answers_with_empty_body() {
        let (app, credentials) = test_app();
        let token = credentials.issue_token(1).unwrap();
        send(
            &app,
            json_request("POST", "/api/contact-list", Some(&token), r#"{"name":"Friends"}"#),
        )
        .await;

        let (status, body) = send(&app, json_request("DELETE", "/api/contact-list/1", Some(&token), "")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let (app, _) = test_app();
        let (status, body) = send(&app, json_request("GET", "/nowhere", None, "")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({ "error": "Not found" }));
    }

    #[tokio::test]
    async fn health_reports_database_status() {
        let (app, _) = test_app();
        let (status, body) = send(&app, json_request("GET", "/health", None, "")).await;

        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], "ok");
    }
}
