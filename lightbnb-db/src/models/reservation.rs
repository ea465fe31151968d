//! Reservation records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Property;

/// A guest's reservation joined with the reserved property and its rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationListing {
    pub reservation_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}
