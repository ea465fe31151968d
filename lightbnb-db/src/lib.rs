//! lightbnb-db: data-access layer for LightBnB
//!
//! Translates structured query options into parameterized SQL and submits
//! them through an injected [`Executor`]. The property search statement is
//! assembled from a predicate list; everything else is fixed-shape binding.
//!
//! ```ignore
//! let pool = create_pool(&DbConfig::default()).await?;
//! let executor = PgExecutor::new(pool);
//! let options = FilterOptions::default().city("Vancouver").min_rating(4.0);
//! let listings = PropertyRepo::new(&executor).search(&options, None).await?;
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod query;

pub use config::{ConfigError, DbConfig};
pub use db::{create_pool, Executor, PgExecutor, Row};
pub use db::repos::{PropertyRepo, ReservationRepo, UserRepo};
pub use error::{DbError, Result, StorageError};
pub use models::{
    FilterOptions, NewProperty, NewUser, Property, PropertyListing, RawFilter,
    ReservationListing, User, ValidationError,
};
pub use query::{SqlValue, Statement, StatementBuilder, DEFAULT_LIMIT};
