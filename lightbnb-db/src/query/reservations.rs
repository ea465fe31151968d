//! Reservation statements

use super::{SqlValue, Statement, DEFAULT_LIMIT};

/// A guest's reservations with property details and rating, excluding
/// reservations that start today, earliest first.
pub fn for_guest(guest_id: i32, limit: Option<i64>) -> Statement {
    Statement::new(
        "SELECT reservations.id AS reservation_id, reservations.start_date, reservations.end_date,\n\
         properties.*, AVG(property_reviews.rating) AS average_rating\n\
         FROM reservations\n\
         JOIN properties ON reservations.property_id = properties.id\n\
         JOIN property_reviews ON properties.id = property_reviews.property_id\n\
         WHERE reservations.guest_id = $1 AND reservations.start_date != now()::date\n\
         GROUP BY properties.id, reservations.id\n\
         ORDER BY reservations.start_date\n\
         LIMIT $2",
        vec![
            SqlValue::from(guest_id),
            SqlValue::from(limit.unwrap_or(DEFAULT_LIMIT)),
        ],
    )
}
