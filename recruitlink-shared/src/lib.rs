//! # RecruitLink Shared Library
//!
//! This crate contains shared types, storage traits, and business logic used
//! by the RecruitLink API server.
//!
//! ## Module Organization
//!
//! - `models`: Database models and data structures
//! - `store`: Repository traits with PostgreSQL and in-memory backends
//! - `auth`: Authentication and authorization utilities
//! - `site`: Site protection gate for the public join flow
//! - `db`: Connection pool management

pub mod auth;
pub mod db;
pub mod models;
pub mod site;
pub mod store;

/// Current version of the RecruitLink shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
