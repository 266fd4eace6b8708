//! Infrastructure layer - External systems integration
//!
//! This module handles the external system concerns:
//! - Database connection and migrations
//! - Repositories

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
