//! Property search filters

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{checked_minor_units, ValidationError};

/// Optional predicates applied to a property listing query.
///
/// Every field is independently optional. `None` means "no constraint";
/// `Some(0)` is a real bound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub owner_id: Option<i32>,
    /// Substring matched against `properties.city`
    pub city: Option<String>,
    /// Lower price bound in major currency units
    pub min_price: Option<Decimal>,
    /// Upper price bound in major currency units
    pub max_price: Option<Decimal>,
    /// Minimum average review rating
    pub min_rating: Option<f64>,
}

impl FilterOptions {
    pub fn owner(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn min_price(mut self, amount: Decimal) -> Self {
        self.min_price = Some(amount);
        self
    }

    pub fn max_price(mut self, amount: Decimal) -> Self {
        self.max_price = Some(amount);
        self
    }

    pub fn min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// Coerce submitted form fields. Same as `FilterOptions::try_from(raw)`.
    pub fn from_raw(raw: RawFilter) -> Result<Self, ValidationError> {
        Self::try_from(raw)
    }

    /// Check that every bound can be bound as a query parameter.
    ///
    /// Prices must be non-negative and still fit once scaled to minor units.
    /// The rating must be a finite, non-negative number.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, price) in [
            ("minimum_price_per_night", self.min_price),
            ("maximum_price_per_night", self.max_price),
        ] {
            let Some(price) = price else { continue };
            if price.is_sign_negative() {
                return Err(ValidationError::Negative { field });
            }
            if checked_minor_units(price).is_none() {
                return Err(ValidationError::OutOfRange { field });
            }
        }

        if let Some(rating) = self.min_rating {
            if !rating.is_finite() {
                return Err(ValidationError::InvalidNumber {
                    field: "minimum_rating",
                    value: rating.to_string(),
                });
            }
            if rating < 0.0 {
                return Err(ValidationError::Negative { field: "minimum_rating" });
            }
        }

        Ok(())
    }
}

/// Search form fields as submitted by the web front end.
///
/// Everything arrives as text; blank fields mean "not set".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFilter {
    pub owner_id: Option<String>,
    pub city: Option<String>,
    pub minimum_price_per_night: Option<String>,
    pub maximum_price_per_night: Option<String>,
    pub minimum_rating: Option<String>,
}

impl TryFrom<RawFilter> for FilterOptions {
    type Error = ValidationError;

    fn try_from(raw: RawFilter) -> Result<Self, Self::Error> {
        let options = Self {
            owner_id: parse_field("owner_id", raw.owner_id)?,
            city: non_blank(raw.city),
            min_price: parse_field("minimum_price_per_night", raw.minimum_price_per_night)?,
            max_price: parse_field("maximum_price_per_night", raw.maximum_price_per_night)?,
            min_rating: parse_field("minimum_rating", raw.minimum_rating)?,
        };
        options.validate()?;
        Ok(options)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn parse_field<T: FromStr>(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<T>, ValidationError> {
    match non_blank(value) {
        None => Ok(None),
        Some(text) => text
            .parse()
            .map(Some)
            .map_err(|_| ValidationError::InvalidNumber { field, value: text }),
    }
}
