//! # Invoice Dashboard Shared Library
//!
//! This crate contains the domain types, validation schemas, and storage
//! seams used by the dashboard API server.
//!
//! ## Module Organization
//!
//! - `form`: Raw form submissions
//! - `validation`: Invoice and signup schemas with field-level errors
//! - `models`: Database models and SQL statements
//! - `store`: Store traits with Postgres and in-memory implementations
//! - `auth`: Password hashing and the credentials provider
//! - `cache`: Page-cache invalidation
//! - `db`: Connection pool setup

pub mod auth;
pub mod cache;
pub mod db;
pub mod form;
pub mod models;
pub mod store;
pub mod validation;

/// Current version of the dashboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
