//! Registration service - validates, hashes and persists new accounts.
//!
//! Orchestrates one attempt: validate via the aggregator (awaiting the
//! asynchronous availability rule), reject with a localized report, or
//! hash the password and hand the record to the repository.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{NewUser, Password, RegistrationRequest, User};
use crate::errors::{AppError, AppResult};
use crate::i18n::{Locale, MessageKey, Translator};
use crate::infra::UserRepository;
use crate::validation::{self, Field, FieldErrors};

/// Outcome of a successful registration attempt.
#[derive(Debug)]
pub struct RegistrationSuccess {
    /// The persisted account.
    pub user: User,
    /// Localized success message for the response body.
    pub message: String,
}

/// Registration service trait for dependency injection.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Run the full pipeline: validate, hash, persist.
    async fn register(
        &self,
        request: RegistrationRequest,
        locale: Locale,
    ) -> AppResult<RegistrationSuccess>;
}

/// Concrete implementation holding the injected collaborators.
pub struct Registrar {
    users: Arc<dyn UserRepository>,
    translator: Arc<dyn Translator>,
}

impl Registrar {
    /// Create a new service instance with explicit collaborators.
    pub fn new(users: Arc<dyn UserRepository>, translator: Arc<dyn Translator>) -> Self {
        Self { users, translator }
    }

    fn email_taken(&self, locale: Locale) -> AppError {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, MessageKey::EmailInUse);
        AppError::FieldValidation(errors.localize(self.translator.as_ref(), locale))
    }
}

#[async_trait]
impl RegistrationService for Registrar {
    async fn register(
        &self,
        request: RegistrationRequest,
        locale: Locale,
    ) -> AppResult<RegistrationSuccess> {
        let errors = validation::validate(&request, self.users.as_ref()).await?;
        if !errors.is_empty() {
            return Err(AppError::FieldValidation(
                errors.localize(self.translator.as_ref(), locale),
            ));
        }

        let (Some(username), Some(email), Some(password)) =
            (request.username, request.email, request.password)
        else {
            // The presence rules run first, so a validated request
            // carries every field.
            return Err(AppError::internal("validated request with absent fields"));
        };

        let password_hash = Password::new(&password)?.into_string();
        let new_user = NewUser {
            username,
            email,
            password_hash,
        };

        let user = match self.users.create(new_user).await {
            Ok(user) => user,
            // The availability check and the insert do not run atomically,
            // so a concurrent attempt can take the email in between. The
            // unique constraint is the authority; report its rejection as
            // the same field error the pre-check would have produced.
            Err(AppError::EmailTaken) => return Err(self.email_taken(locale)),
            Err(err) => return Err(err),
        };

        tracing::info!(user_id = %user.id, "user registered");

        Ok(RegistrationSuccess {
            message: self
                .translator
                .translate(MessageKey::UserCreateSuccess, locale),
            user,
        })
    }
}
