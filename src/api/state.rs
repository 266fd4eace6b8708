//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::i18n::Catalog;
use crate::infra::{Database, UserStore};
use crate::services::{RegistrationService, Registrar};

/// Application state containing the injected services.
#[derive(Clone)]
pub struct AppState {
    /// Registration service
    pub registration_service: Arc<dyn RegistrationService>,
}

impl AppState {
    /// Create application state with manually injected services.
    pub fn new(registration_service: Arc<dyn RegistrationService>) -> Self {
        Self {
            registration_service,
        }
    }

    /// Wire the default collaborators on top of a database connection.
    pub fn from_database(database: &Database) -> Self {
        let users = Arc::new(UserStore::new(database.get_connection()));
        let translator = Arc::new(Catalog);
        Self::new(Arc::new(Registrar::new(users, translator)))
    }
}
