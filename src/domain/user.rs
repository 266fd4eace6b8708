//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// User domain entity
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a new account.
///
/// Built only after validation fully passed; `password_hash` is already
/// the derived digest, never the plaintext.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Candidate registration input as received from the boundary.
///
/// Fields are nullable on the wire; a missing field and a JSON null are
/// treated alike. Content checks belong to the rule engine, so nothing
/// is enforced during deserialization.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegistrationRequest {
    /// Candidate username
    #[serde(default)]
    #[schema(example = "user1")]
    pub username: Option<String>,
    /// Candidate email address
    #[serde(default)]
    #[schema(example = "user1@mail.com")]
    pub email: Option<String>,
    /// Candidate password
    #[serde(default)]
    #[schema(example = "P4ssword")]
    pub password: Option<String>,
}
