//! Shared test fixtures: fake collaborators and request helpers.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;
use uuid::Uuid;

use registration_api::api::{create_router, AppState};
use registration_api::domain::{NewUser, User};
use registration_api::errors::{AppError, AppResult};
use registration_api::i18n::Catalog;
use registration_api::infra::UserRepository;
use registration_api::services::Registrar;

/// In-memory user store honoring the unique email constraint.
#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<Vec<User>>,
}

impl InMemoryUsers {
    /// A store seeded with one existing account owning `email`.
    pub fn with_user(email: &str) -> Self {
        let store = Self::default();
        store.users.lock().unwrap().push(stored_user(email));
        store
    }

    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::EmailTaken);
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }
}

/// Repository whose operations always fail, for fault propagation tests.
pub struct UnavailableUsers;

#[async_trait]
impl UserRepository for UnavailableUsers {
    async fn find_by_email(&self, _email: &str) -> AppResult<Option<User>> {
        Err(AppError::internal("users table unreachable"))
    }

    async fn create(&self, _new_user: NewUser) -> AppResult<User> {
        Err(AppError::internal("users table unreachable"))
    }
}

fn stored_user(email: &str) -> User {
    User {
        id: Uuid::new_v4(),
        username: "user1".to_string(),
        email: email.to_string(),
        password_hash: "stored-hash".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Build the real router around a repository fake.
pub fn app(users: Arc<dyn UserRepository>) -> Router {
    let service = Registrar::new(users, Arc::new(Catalog));
    create_router(AppState::new(Arc::new(service)))
}

/// The registration payload every test starts from.
pub fn valid_user() -> Value {
    json!({
        "username": "user1",
        "email": "user1@mail.com",
        "password": "P4ssword",
    })
}

/// POST the payload to the registration endpoint, optionally with an
/// `Accept-Language` header. Returns status, parsed body and the raw
/// body text (for key-order assertions).
pub async fn post_user(
    app: Router,
    body: Value,
    language: Option<&str>,
) -> (StatusCode, Value, String) {
    let mut request = Request::builder()
        .method("POST")
        .uri("/api/1.0/users")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(language) = language {
        request = request.header(header::ACCEPT_LANGUAGE, language);
    }

    let response = app
        .oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let raw = String::from_utf8(bytes.to_vec()).unwrap();
    let value = serde_json::from_str(&raw).unwrap();
    (status, value, raw)
}
