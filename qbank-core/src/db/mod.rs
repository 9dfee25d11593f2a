//! Database layer - SQLite connection pool and schema
//!
//! The pool is created and owned by the caller; storage backends borrow it.
//! Uniqueness of question text is a table constraint, not an application check.

pub mod migrations;
pub mod pool;

pub use pool::{
    create_memory_pool, create_pool, create_pool_with_options, sqlite_url, DEFAULT_MAX_CONNECTIONS,
};
