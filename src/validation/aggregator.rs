//! Runs the rule engine across all fields and collects failures.

use crate::domain::RegistrationRequest;
use crate::errors::AppResult;
use crate::infra::UserRepository;

use super::rules::check_field;
use super::{Field, FieldErrors};

/// Validate a registration request field by field.
///
/// Every field is evaluated independently in declaration order; one
/// field's failure never suppresses another field's chain. The returned
/// collection is empty exactly when validation succeeded. This function
/// itself never fails; only collaborator errors propagate.
pub async fn validate(
    request: &RegistrationRequest,
    users: &dyn UserRepository,
) -> AppResult<FieldErrors> {
    let mut errors = FieldErrors::new();
    for field in Field::ALL {
        if let Some(key) = check_field(field, value_of(request, field), users).await? {
            errors.insert(field, key);
        }
    }
    Ok(errors)
}

fn value_of(request: &RegistrationRequest, field: Field) -> Option<&str> {
    match field {
        Field::Username => request.username.as_deref(),
        Field::Email => request.email.as_deref(),
        Field::Password => request.password.as_deref(),
    }
}
