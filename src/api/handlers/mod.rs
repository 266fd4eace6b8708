//! HTTP request handlers.

pub mod registration_handler;

pub use registration_handler::user_routes;
