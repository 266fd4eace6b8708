//! Validation core - rule engine and error aggregation.
//!
//! Rules live in one fixed, ordered table and are evaluated by a small
//! interpreter with bail semantics: the first failing rule for a field
//! short-circuits the rest of that field's chain, synchronous and
//! asynchronous rules alike. Field failures are independent of each
//! other and are collected into an ordered, field-keyed report.

mod aggregator;
mod report;
mod rules;

pub use aggregator::validate;
pub use report::{Field, FieldErrorReport, FieldErrors};
pub use rules::check_field;
