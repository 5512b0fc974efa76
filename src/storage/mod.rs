//! Storage layer for the fantasy football record store
//!
//! This module provides a read-oriented abstraction over the SQLite database,
//! organized into logical components:
//! - `schema`: Database connection and schema management
//! - `filters`: Filter-to-SQL predicate translation
//! - `queries`: List, lookup and count operations
//! - `load`: Upserts used by the bulk loader and test fixtures

pub mod filters;
pub mod load;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

pub use filters::{SqlFilter, WhereClause};
pub use schema::FantasyDatabase;
