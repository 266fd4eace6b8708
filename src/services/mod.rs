//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. Collaborators are injected at construction
//! time behind traits, never referenced as ambient singletons.

mod registration_service;

pub use registration_service::{RegistrationService, RegistrationSuccess, Registrar};
