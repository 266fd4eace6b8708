//! Shared types.

mod response;

pub use response::{MessageResponse, ValidationErrorResponse};
