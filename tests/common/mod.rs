#![allow(dead_code)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::{Response, StatusCode};
use serde_json::{json, Value};

use addressbook_api::auth::CredentialService;
use addressbook_api::router;
use addressbook_api::state::AppState;
use addressbook_api::testing::MemoryStore;

pub const PASSWORD: &str = "password";

/// Router served in-process on a free port, backed by a fresh in-memory store.
/// Lives on the calling test's runtime, so every test gets its own server.
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let credentials = Arc::new(CredentialService::new("test-secret", 4)?);
        let state = AppState::new(Arc::new(MemoryStore::new()), credentials);
        let app = router::app(state, &["*".to_string()]);

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test listener")?;
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("test server stopped: {e}");
            }
        });

        let server = Self {
            port,
            base_url,
            client: reqwest::Client::new(),
        };
        server.wait_ready(Duration::from_secs(5)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(resp) = self.client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn post(&self, path: &str, token: Option<&str>, body: &Value) -> Result<Response> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        Ok(request.send().await?)
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> Result<Response> {
        let mut request = self.client.get(self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        Ok(request.send().await?)
    }

    pub async fn delete(&self, path: &str, token: Option<&str>, body: Option<&Value>) -> Result<Response> {
        let mut request = self.client.delete(self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }

    /// Register `username` (<username>@mail.com) and return its id
    pub async fn register(&self, username: &str) -> Result<i64> {
        let body = json!({
            "username": username,
            "email": format!("{}@mail.com", username),
            "password": PASSWORD,
        });
        let res = self.post("/api/user", None, &body).await?;
        anyhow::ensure!(res.status() == StatusCode::OK, "register failed: {}", res.status());
        id_from(res).await
    }

    pub async fn login(&self, username: &str) -> Result<String> {
        let body = json!({ "username": username, "password": PASSWORD });
        let res = self.post("/api/user/token", None, &body).await?;
        anyhow::ensure!(res.status() == StatusCode::OK, "login failed: {}", res.status());
        let body: Value = res.json().await?;
        body["token"]
            .as_str()
            .map(str::to_string)
            .context("token missing from response")
    }

    /// Register and log in, returning the bearer token
    pub async fn user(&self, username: &str) -> Result<String> {
        self.register(username).await?;
        self.login(username).await
    }

    pub async fn create_contact(&self, token: &str, name: &str) -> Result<i64> {
        let body = json!({
            "name": name,
            "surname": "Doe",
            "email": format!("{}@mail.com", name.to_lowercase()),
        });
        let res = self.post("/api/contact", Some(token), &body).await?;
        anyhow::ensure!(res.status() == StatusCode::OK, "create contact failed: {}", res.status());
        id_from(res).await
    }

    pub async fn create_list(&self, token: &str, name: &str) -> Result<i64> {
        let res = self.post("/api/contact-list", Some(token), &json!({ "name": name })).await?;
        anyhow::ensure!(res.status() == StatusCode::OK, "create list failed: {}", res.status());
        id_from(res).await
    }
}

pub async fn id_from(res: Response) -> Result<i64> {
    let body: Value = res.json().await?;
    body["id"].as_i64().context("id missing from response")
}

/// Assert status and `{"error": message}` body
pub async fn expect_error(res: Response, status: StatusCode, message: &str) -> Result<()> {
    assert_eq!(res.status(), status);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({ "error": message }));
    Ok(())
}
