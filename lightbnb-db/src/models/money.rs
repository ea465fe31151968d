//! Currency scaling
//!
//! Prices travel in major units (dollars) at the boundary and are stored in
//! minor units (cents) in `properties.cost_per_night`.

use rust_decimal::Decimal;

/// Minor units per major currency unit.
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Scale a major-unit amount to minor units. Exact; fractional cents survive.
///
/// Saturates at the bounds of `Decimal`. Boundary validation rejects such
/// amounts with [`checked_minor_units`] before they get here.
pub fn to_minor_units(amount: Decimal) -> Decimal {
    amount.saturating_mul(Decimal::from(MINOR_UNITS_PER_MAJOR))
}

/// Like [`to_minor_units`], but `None` when the scaled amount does not fit.
pub fn checked_minor_units(amount: Decimal) -> Option<Decimal> {
    amount.checked_mul(Decimal::from(MINOR_UNITS_PER_MAJOR))
}
