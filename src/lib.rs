//! Registration API
//!
//! Validates and registers new user accounts. Each input field runs
//! through an ordered, short-circuiting rule chain (one rule is
//! asynchronous and queries the account store); failures are aggregated
//! into a field-keyed report, resolved to the requested locale at the
//! boundary. Only a fully valid request is hashed and persisted.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **i18n**: Locales, message keys and the translation catalog
//! - **validation**: The rule engine and error aggregator
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod i18n;
pub mod infra;
pub mod services;
pub mod types;
pub mod validation;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, RegistrationRequest, User};
pub use errors::{AppError, AppResult};
