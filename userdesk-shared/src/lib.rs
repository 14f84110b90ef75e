//! # Userdesk Shared Library
//!
//! Types and data access shared by the Userdesk API server and the HTTP
//! client.
//!
//! ## Module Organization
//!
//! - `models`: The `User` resource and its create/update payloads
//! - `validation`: Payload schema checks for create and update requests
//! - `error`: JSON error body exchanged between server and client
//! - `store`: `UserStore` trait with PostgreSQL and in-memory backends
//! - `db`: Connection pooling and migrations

pub mod db;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;

/// Current version of the Userdesk shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
