//! Statement construction
//!
//! Pure functions from typed inputs to [`Statement`]s. Nothing here touches
//! the database.

pub mod properties;
pub mod reservations;
pub mod statement;
pub mod users;

pub use statement::{SqlValue, Statement, StatementBuilder};

/// Row limit applied when the caller does not give one.
pub const DEFAULT_LIMIT: i64 = 10;
