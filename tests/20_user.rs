mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::{expect_error, TestServer, PASSWORD};

#[tokio::test]
async fn registration_returns_sequential_ids() -> Result<()> {
    let server = TestServer::start().await?;

    assert_eq!(server.register("user").await?, 1);
    assert_eq!(server.register("other").await?, 2);
    Ok(())
}

#[tokio::test]
async fn registration_validates_fields_in_order() -> Result<()> {
    let server = TestServer::start().await?;

    let cases = [
        (json!({ "email": "valid@mail.com", "password": PASSWORD }), "Username field is missing"),
        (json!({ "username": "user", "password": PASSWORD }), "Email field is missing"),
        (json!({ "username": "user", "email": "valid@mail.com" }), "Password field is missing"),
        (
            json!({ "username": "user", "email": "invalid", "password": PASSWORD }),
            "Provided email address is malformed",
        ),
        (
            json!({ "username": "user", "email": "valid@mail.com", "password": "short" }),
            "Password length can't be smaller than 6",
        ),
    ];

    for (body, message) in cases {
        let res = server.post("/api/user", None, &body).await?;
        expect_error(res, StatusCode::BAD_REQUEST, message).await?;
    }
    Ok(())
}

#[tokio::test]
async fn registration_rejects_non_json_body() -> Result<()> {
    let server = TestServer::start().await?;

    let res = server
        .client
        .post(server.url("/api/user"))
        .body("username=user")
        .send()
        .await?;
    expect_error(res, StatusCode::BAD_REQUEST, "Request body couldn't be parsed as JSON").await
}

#[tokio::test]
async fn duplicate_username_or_email_is_rejected() -> Result<()> {
    let server = TestServer::start().await?;
    server.register("user").await?;

    let same_name = json!({ "username": "user", "email": "fresh@mail.com", "password": PASSWORD });
    let res = server.post("/api/user", None, &same_name).await?;
    expect_error(res, StatusCode::BAD_REQUEST, "Username or email is already taken").await?;

    let same_email = json!({ "username": "fresh", "email": "user@mail.com", "password": PASSWORD });
    let res = server.post("/api/user", None, &same_email).await?;
    expect_error(res, StatusCode::BAD_REQUEST, "Username or email is already taken").await
}

#[tokio::test]
async fn token_by_username_or_email_blanks_the_password() -> Result<()> {
    let server = TestServer::start().await?;
    let id = server.register("user").await?;

    for body in [
        json!({ "username": "user", "password": PASSWORD }),
        json!({ "email": "user@mail.com", "password": PASSWORD }),
    ] {
        let res = server.post("/api/user/token", None, &body).await?;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await?;
        assert!(!body["token"].as_str().unwrap_or_default().is_empty());
        assert_eq!(
            body["user"],
            json!({ "id": id, "username": "user", "email": "user@mail.com", "password": "" })
        );
    }
    Ok(())
}

#[tokio::test]
async fn token_request_failures() -> Result<()> {
    let server = TestServer::start().await?;
    server.register("user").await?;

    let res = server.post("/api/user/token", None, &json!({ "password": PASSWORD })).await?;
    expect_error(
        res,
        StatusCode::BAD_REQUEST,
        "Username and email fields are missing, at least one is required",
    )
    .await?;

    let res = server.post("/api/user/token", None, &json!({ "username": "user" })).await?;
    expect_error(res, StatusCode::BAD_REQUEST, "Password field is missing").await?;

    let res = server
        .post("/api/user/token", None, &json!({ "username": "nobody", "password": PASSWORD }))
        .await?;
    expect_error(res, StatusCode::BAD_REQUEST, "User does not exist").await?;

    let res = server
        .post("/api/user/token", None, &json!({ "username": "user", "password": "wrong-password" }))
        .await?;
    expect_error(res, StatusCode::BAD_REQUEST, "Wrong password").await
}

#[tokio::test]
async fn malformed_authorization_headers_are_rejected() -> Result<()> {
    let server = TestServer::start().await?;

    let res = server.get("/api/contact", None).await?;
    expect_error(res, StatusCode::UNAUTHORIZED, "Token is missing").await?;

    let res = server
        .client
        .get(server.url("/api/contact"))
        .header("Authorization", "Token abc")
        .send()
        .await?;
    expect_error(res, StatusCode::UNAUTHORIZED, "Token is missing").await?;

    let res = server.get("/api/contact", Some("not.a.jwt")).await?;
    expect_error(res, StatusCode::UNAUTHORIZED, "Invalid token").await
}
