//! Property repository
//!
//! Handles property search (dynamic filters, rating aggregate) and insertion.

use tracing::{debug, instrument};

use super::{decode_all, decode_first};
use crate::db::Executor;
use crate::error::DbError;
use crate::models::{FilterOptions, NewProperty, Property, PropertyListing};
use crate::query::properties;

/// Property repository
pub struct PropertyRepo<'a> {
    executor: &'a dyn Executor,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(executor: &'a dyn Executor) -> Self {
        Self { executor }
    }

    /// Search properties matching `options`, cheapest first.
    ///
    /// `limit` defaults to 10. Options that cannot be bound are rejected
    /// before anything is executed.
    #[instrument(skip_all, fields(limit = ?limit))]
    pub async fn search(
        &self,
        options: &FilterOptions,
        limit: Option<i64>,
    ) -> Result<Vec<PropertyListing>, DbError> {
        options.validate()?;

        let statement = properties::search(options, limit);
        debug!(filters = ?options, params = statement.params().len(), "searching properties");

        let rows = self.executor.execute(&statement).await?;
        decode_all(rows, "property listing")
    }

    /// Insert a property and return the stored row.
    #[instrument(skip_all, fields(owner_id = property.owner_id))]
    pub async fn create(&self, property: &NewProperty) -> Result<Property, DbError> {
        property.validate()?;

        let rows = self.executor.execute(&properties::insert(property)).await?;
        decode_first(rows, "property")?.ok_or(DbError::EmptyResult { record: "property" })
    }
}
