//! Command implementations for the lightbnb CLI

pub mod properties;
pub mod reservations;
pub mod users;

use anyhow::{Context, Result};
use lightbnb_db::{create_pool, DbConfig, PgExecutor};

// Re-export dispatcher functions for flat access from main.rs
pub use properties::run_properties;
pub use reservations::run_reservations;
pub use users::run_user;

/// Open a pooled Postgres executor.
pub async fn connect(config: &DbConfig) -> Result<PgExecutor> {
    let pool = create_pool(config)
        .await
        .with_context(|| format!("Failed to connect to {}", config.redacted_url()))?;
    Ok(PgExecutor::new(pool))
}
