//! SQLite data access layer for the MovieLens database.
//!
//! Wraps the three statement shapes the rest of the application needs
//! (single-row fetch, multi-row fetch, mutation) and the helpers for
//! opening a database file.

pub mod access;
pub mod schema;

pub use access::{execute_mutation, fetch_many, fetch_one, DataAccessError};
pub use schema::{create_schema, open_database, open_memory, SchemaError, REQUIRED_TABLES};

