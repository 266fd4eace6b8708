//! Response body types fixed by the boundary contract.

use serde::Serialize;
use utoipa::ToSchema;

use crate::validation::FieldErrorReport;

/// Message-only response (success body)
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Localized outcome message
    #[schema(example = "User created")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Validation failure body, keyed by field in declaration order
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// Localized message per failing field
    #[serde(rename = "validationErrors")]
    #[schema(value_type = Object)]
    pub validation_errors: FieldErrorReport,
}
