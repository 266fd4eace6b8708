//! User registration handler.

use axum::{extract::State, response::Json, routing::post, Router};

use crate::api::extractors::RequestLocale;
use crate::api::AppState;
use crate::domain::RegistrationRequest;
use crate::errors::AppResult;
use crate::types::{MessageResponse, ValidationErrorResponse};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(register))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/1.0/users",
    tag = "Users",
    request_body = RegistrationRequest,
    params(
        ("Accept-Language" = Option<String>, Header, description = "Locale for response messages")
    ),
    responses(
        (status = 200, description = "User registered", body = MessageResponse),
        (status = 400, description = "Validation failure", body = ValidationErrorResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    Json(payload): Json<RegistrationRequest>,
) -> AppResult<Json<MessageResponse>> {
    let outcome = state.registration_service.register(payload, locale).await?;

    Ok(Json(MessageResponse::new(outcome.message)))
}
