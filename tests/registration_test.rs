//! Integration tests for the registration endpoint.
//!
//! Drive the real router with an in-memory fake repository; no database
//! or network required.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use registration_api::domain::Password;

use common::{app, post_user, valid_user, InMemoryUsers, UnavailableUsers};

#[tokio::test]
async fn returns_200_and_success_message_when_signup_request_is_valid() {
    let store = Arc::new(InMemoryUsers::default());
    let (status, body, _) = post_user(app(store), valid_user(), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User created" }));
}

#[tokio::test]
async fn saves_the_user_with_a_hashed_password() {
    let store = Arc::new(InMemoryUsers::default());
    post_user(app(store.clone()), valid_user(), None).await;

    let saved = store.all();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].username, "user1");
    assert_eq!(saved[0].email, "user1@mail.com");

    // The plaintext never reaches the record, but the digest verifies.
    assert_ne!(saved[0].password_hash, "P4ssword");
    assert!(Password::from_hash(saved[0].password_hash.clone()).verify("P4ssword"));
}

#[tokio::test]
async fn returns_400_when_username_is_null() {
    let store = Arc::new(InMemoryUsers::default());
    let mut payload = valid_user();
    payload["username"] = json!(null);

    let (status, body, _) = post_user(app(store.clone()), payload, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["validationErrors"]["username"],
        "Username cannot be null"
    );
    assert!(store.all().is_empty());
}

#[tokio::test]
async fn returns_errors_for_both_when_username_and_email_are_null() {
    let store = Arc::new(InMemoryUsers::default());
    let payload = json!({
        "username": null,
        "email": null,
        "password": "P4ssword",
    });

    let (status, body, raw) = post_user(app(store), payload, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["validationErrors"].as_object().unwrap();
    assert_eq!(errors.len(), 2);
    assert!(errors.contains_key("username"));
    assert!(errors.contains_key("email"));

    // Keys follow field declaration order in the serialized body.
    assert!(raw.find("\"username\"").unwrap() < raw.find("\"email\"").unwrap());
}

#[tokio::test]
async fn missing_fields_are_treated_like_nulls() {
    let store = Arc::new(InMemoryUsers::default());
    let (status, body, _) = post_user(app(store), json!({ "password": "P4ssword" }), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["validationErrors"]["username"],
        "Username cannot be null"
    );
    assert_eq!(body["validationErrors"]["email"], "Email cannot be null");
}

#[tokio::test]
async fn returns_the_expected_message_per_invalid_field_value() {
    let long_username = "a".repeat(33);
    let cases = [
        ("username", json!(null), "Username cannot be null"),
        ("username", json!("usr"), "Must have min 4 and max 32 characters"),
        (
            "username",
            json!(long_username),
            "Must have min 4 and max 32 characters",
        ),
        ("email", json!(null), "Email cannot be null"),
        ("email", json!("mail.com"), "Email is not valid"),
        ("email", json!("user.mail.com"), "Email is not valid"),
        ("email", json!("user@.com"), "Email is not valid"),
        ("password", json!(null), "Password cannot be null"),
        (
            "password",
            json!("P4saw"),
            "Password must be at least 6 characters",
        ),
        (
            "password",
            json!("alllowercase"),
            "Password must have at least 1 uppercase, 1 lowercase letter and 1 number",
        ),
        (
            "password",
            json!("ALLUPPERCASE"),
            "Password must have at least 1 uppercase, 1 lowercase letter and 1 number",
        ),
        (
            "password",
            json!("1234567890"),
            "Password must have at least 1 uppercase, 1 lowercase letter and 1 number",
        ),
        (
            "password",
            json!("lowerandUpper"),
            "Password must have at least 1 uppercase, 1 lowercase letter and 1 number",
        ),
        (
            "password",
            json!("lowerand1234"),
            "Password must have at least 1 uppercase, 1 lowercase letter and 1 number",
        ),
        (
            "password",
            json!("UPPERAND1234"),
            "Password must have at least 1 uppercase, 1 lowercase letter and 1 number",
        ),
    ];

    for (field, value, expected) in cases {
        let store = Arc::new(InMemoryUsers::default());
        let mut payload = valid_user();
        payload[field] = value.clone();

        let (status, body, _) = post_user(app(store), payload, None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{field}={value}");
        assert_eq!(
            body["validationErrors"][field], expected,
            "{field}={value}"
        );
    }
}

#[tokio::test]
async fn returns_email_in_use_when_same_email_is_already_registered() {
    let store = Arc::new(InMemoryUsers::with_user("user1@mail.com"));
    let (status, body, _) = post_user(app(store.clone()), valid_user(), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["validationErrors"].as_object().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors["email"], "Email in use");
    assert_eq!(store.all().len(), 1);
}

#[tokio::test]
async fn reports_null_username_and_taken_email_together() {
    let store = Arc::new(InMemoryUsers::with_user("user1@mail.com"));
    let mut payload = valid_user();
    payload["username"] = json!(null);

    let (_, body, raw) = post_user(app(store), payload, None).await;

    let errors = body["validationErrors"].as_object().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors["username"], "Username cannot be null");
    assert_eq!(errors["email"], "Email in use");
    assert!(raw.find("\"username\"").unwrap() < raw.find("\"email\"").unwrap());
}

#[tokio::test]
async fn rejection_is_idempotent() {
    let payload = json!({
        "username": "usr",
        "email": "mail.com",
        "password": "short",
    });

    let store = Arc::new(InMemoryUsers::default());
    let (_, _, first) = post_user(app(store.clone()), payload.clone(), None).await;
    let (_, _, second) = post_user(app(store), payload, None).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn repository_failure_is_not_reported_as_success() {
    let (status, body, _) = post_user(app(Arc::new(UnavailableUsers)), valid_user(), None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("message").is_none());
    assert!(body.get("validationErrors").is_none());
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
}
