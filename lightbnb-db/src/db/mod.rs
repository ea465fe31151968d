//! Database layer - executor, connection pool and repositories
//!
//! # Design Principles
//!
//! - Repositories take an injected `&dyn Executor`; there is no global pool
//! - Statements are built by `crate::query` before anything touches the store
//! - Storage failures are returned, never logged-and-dropped

pub mod executor;
pub mod pool;
pub mod repos;

pub use executor::{Executor, PgExecutor, Row};
pub use pool::create_pool;
