//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::registration_handler;
use crate::domain::RegistrationRequest;
use crate::types::{MessageResponse, ValidationErrorResponse};

/// OpenAPI documentation for the Registration API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registration API",
        version = "0.1.0",
        description = "User registration with per-field validation and localized messages",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(registration_handler::register),
    components(schemas(RegistrationRequest, MessageResponse, ValidationErrorResponse)),
    tags(
        (name = "Users", description = "User registration")
    )
)]
pub struct ApiDoc;
