mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::{expect_error, TestServer};

fn entries(list: i64) -> String {
    format!("/api/contact-list/{}/contact", list)
}

async fn names(server: &TestServer, token: &str, list: i64) -> Result<Vec<String>> {
    let body: Value = server.get(&entries(list), Some(token)).await?.json().await?;
    Ok(body
        .as_array()
        .map(|a| a.iter().filter_map(|c| c["name"].as_str().map(str::to_string)).collect())
        .unwrap_or_default())
}

#[tokio::test]
async fn add_list_and_remove_contacts() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.user("user").await?;
    let list = server.create_list(&token, "Friends").await?;
    let bob = server.create_contact(&token, "Bob").await?;
    let alice = server.create_contact(&token, "Alice").await?;

    assert!(names(&server, &token, list).await?.is_empty());

    for contact in [bob, alice] {
        let res = server.post(&entries(list), Some(&token), &json!({ "id": contact })).await?;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.text().await?.is_empty());
    }
    assert_eq!(names(&server, &token, list).await?, ["Bob", "Alice"]);

    let res = server.delete(&entries(list), Some(&token), Some(&json!({ "id": bob }))).await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(names(&server, &token, list).await?, ["Alice"]);
    Ok(())
}

#[tokio::test]
async fn duplicate_entry_is_rejected() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.user("user").await?;
    let list = server.create_list(&token, "Friends").await?;
    let bob = server.create_contact(&token, "Bob").await?;

    server.post(&entries(list), Some(&token), &json!({ "id": bob })).await?;
    let res = server.post(&entries(list), Some(&token), &json!({ "id": bob })).await?;
    expect_error(res, StatusCode::BAD_REQUEST, "Contact is already in the contact-list").await
}

#[tokio::test]
async fn deleting_a_contact_removes_its_entries() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.user("user").await?;
    let list = server.create_list(&token, "Friends").await?;
    let bob = server.create_contact(&token, "Bob").await?;

    server.post(&entries(list), Some(&token), &json!({ "id": bob })).await?;
    server.delete(&format!("/api/contact/{}", bob), Some(&token), None).await?;

    assert!(names(&server, &token, list).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn body_id_is_checked_before_path_id() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.user("user").await?;

    let res = server.post(&entries(1), Some(&token), &json!({})).await?;
    expect_error(res, StatusCode::BAD_REQUEST, "ID field is missing").await?;

    let res = server
        .post("/api/contact-list/abc/contact", Some(&token), &json!({ "id": 1 }))
        .await?;
    expect_error(res, StatusCode::BAD_REQUEST, "Provided ID can't be parsed as an integer").await?;

    let res = server.post(&entries(1), Some(&token), &json!({ "id": 1 })).await?;
    expect_error(res, StatusCode::BAD_REQUEST, "Requested contact-list does not exist").await
}

#[tokio::test]
async fn membership_requires_owning_both_sides() -> Result<()> {
    let server = TestServer::start().await?;
    let alice = server.user("alice").await?;
    let bob = server.user("bob").await?;

    let alice_list = server.create_list(&alice, "Friends").await?;
    let alice_contact = server.create_contact(&alice, "Carol").await?;
    let bob_contact = server.create_contact(&bob, "Dave").await?;

    // Someone else's contact in my list
    let res = server
        .post(&entries(alice_list), Some(&alice), &json!({ "id": bob_contact }))
        .await?;
    expect_error(res, StatusCode::UNAUTHORIZED, "Can't modify contact belonging to another user").await?;

    // My contact in someone else's list
    let res = server
        .post(&entries(alice_list), Some(&bob), &json!({ "id": bob_contact }))
        .await?;
    expect_error(res, StatusCode::UNAUTHORIZED, "Can't modify contact-list belonging to another user").await?;

    let res = server.get(&entries(alice_list), Some(&bob)).await?;
    expect_error(res, StatusCode::UNAUTHORIZED, "Can't fetch contact-list belonging to another user").await?;

    let res = server
        .delete(&entries(alice_list), Some(&bob), Some(&json!({ "id": alice_contact })))
        .await?;
    expect_error(res, StatusCode::UNAUTHORIZED, "Can't modify contact-list belonging to another user").await
}

#[tokio::test]
async fn missing_contact_in_membership_request() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.user("user").await?;
    let list = server.create_list(&token, "Friends").await?;

    let res = server.post(&entries(list), Some(&token), &json!({ "id": 99 })).await?;
    expect_error(res, StatusCode::BAD_REQUEST, "Requested contact does not exist").await
}
