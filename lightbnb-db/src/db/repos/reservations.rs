//! Reservation repository

use tracing::instrument;

use super::decode_all;
use crate::db::Executor;
use crate::error::DbError;
use crate::models::ReservationListing;
use crate::query::reservations;

/// Reservation repository
pub struct ReservationRepo<'a> {
    executor: &'a dyn Executor,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(executor: &'a dyn Executor) -> Self {
        Self { executor }
    }

    /// A guest's reservations with property details, earliest first.
    #[instrument(skip(self))]
    pub async fn list_for_guest(
        &self,
        guest_id: i32,
        limit: Option<i64>,
    ) -> Result<Vec<ReservationListing>, DbError> {
        let rows = self
            .executor
            .execute(&reservations::for_guest(guest_id, limit))
            .await?;
        decode_all(rows, "reservation")
    }
}
