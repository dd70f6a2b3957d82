//! Conversion tests
//!
//! Tests for the term and group passes over whole documents:
//! - Tag uniqueness and precedence
//! - Group membership
//! - Fail-fast error reporting

mod tests_errors;
mod tests_properties;
