//! Property search statement
//!
//! Filters are first collected into an ordered predicate list, then rendered
//! in one pass: the first predicate opens `WHERE`, the rest join with `AND`.
//! Price bounds are scaled to minor units when bound; the rating bound and
//! the limit are bound as given.

use rust_decimal::Decimal;

use super::{SqlValue, Statement, StatementBuilder, DEFAULT_LIMIT};
use crate::models::{to_minor_units, FilterOptions, NewProperty};

const SELECT_LISTINGS: &str = "SELECT properties.*, AVG(property_reviews.rating) AS average_rating\n\
FROM properties\n\
JOIN property_reviews ON properties.id = property_reviews.property_id";

#[derive(Debug, Clone, PartialEq)]
enum Predicate<'a> {
    Owner(i32),
    CityContains(&'a str),
    CostBetween(Decimal, Decimal),
    CostAtLeast(Decimal),
    CostAtMost(Decimal),
}

impl<'a> Predicate<'a> {
    /// Owner, then city, then at most one price predicate.
    fn collect(options: &'a FilterOptions) -> Vec<Self> {
        let mut predicates = Vec::with_capacity(3);

        if let Some(owner_id) = options.owner_id {
            predicates.push(Self::Owner(owner_id));
        }
        if let Some(city) = options.city.as_deref() {
            predicates.push(Self::CityContains(city));
        }
        match (options.min_price, options.max_price) {
            (Some(min), Some(max)) => predicates.push(Self::CostBetween(min, max)),
            (Some(min), None) => predicates.push(Self::CostAtLeast(min)),
            (None, Some(max)) => predicates.push(Self::CostAtMost(max)),
            (None, None) => {}
        }

        predicates
    }

    fn render(&self, builder: &mut StatementBuilder) {
        match *self {
            Self::Owner(owner_id) => {
                builder.push("properties.owner_id = ").push_bind(owner_id);
            }
            Self::CityContains(city) => {
                builder
                    .push("properties.city LIKE ")
                    .push_bind(format!("%{city}%"));
            }
            Self::CostBetween(min, max) => {
                builder
                    .push("properties.cost_per_night BETWEEN ")
                    .push_bind(to_minor_units(min))
                    .push(" AND ")
                    .push_bind(to_minor_units(max));
            }
            Self::CostAtLeast(min) => {
                builder
                    .push("properties.cost_per_night >= ")
                    .push_bind(to_minor_units(min));
            }
            Self::CostAtMost(max) => {
                builder
                    .push("properties.cost_per_night <= ")
                    .push_bind(to_minor_units(max));
            }
        }
    }
}

/// Build the property search statement.
///
/// `limit` defaults to [`DEFAULT_LIMIT`] and is always the last parameter.
///
/// # Example
/// ```
/// use lightbnb_db::models::FilterOptions;
/// use lightbnb_db::query::properties;
///
/// let statement = properties::search(&FilterOptions::default().city("Vancouver"), None);
/// assert!(statement.sql().contains("WHERE properties.city LIKE $1"));
/// assert_eq!(statement.params().len(), 2);
/// ```
pub fn search(options: &FilterOptions, limit: Option<i64>) -> Statement {
    let mut builder = StatementBuilder::new(SELECT_LISTINGS);

    for (position, predicate) in Predicate::collect(options).iter().enumerate() {
        builder.push(if position == 0 { "\nWHERE " } else { " AND " });
        predicate.render(&mut builder);
    }

    builder.push("\nGROUP BY properties.id");

    if let Some(rating) = options.min_rating {
        builder
            .push("\nHAVING AVG(property_reviews.rating) >= ")
            .push_bind(rating);
    }

    builder
        .push("\nORDER BY properties.cost_per_night")
        .push("\nLIMIT ")
        .push_bind(limit.unwrap_or(DEFAULT_LIMIT));

    builder.build()
}

/// Insert a property, scaling `cost_per_night` to minor units.
pub fn insert(property: &NewProperty) -> Statement {
    Statement::new(
        "INSERT INTO properties (\n\
         owner_id, title, description, thumbnail_photo_url, cover_photo_url,\n\
         cost_per_night, street, city, province, post_code, country,\n\
         parking_spaces, number_of_bathrooms, number_of_bedrooms)\n\
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)\n\
         RETURNING *",
        vec![
            SqlValue::from(property.owner_id),
            SqlValue::from(property.title.as_str()),
            SqlValue::from(property.description.as_str()),
            SqlValue::from(property.thumbnail_photo_url.as_str()),
            SqlValue::from(property.cover_photo_url.as_str()),
            SqlValue::from(to_minor_units(property.cost_per_night)),
            SqlValue::from(property.street.as_str()),
            SqlValue::from(property.city.as_str()),
            SqlValue::from(property.province.as_str()),
            SqlValue::from(property.post_code.as_str()),
            SqlValue::from(property.country.as_str()),
            SqlValue::from(property.parking_spaces),
            SqlValue::from(property.number_of_bathrooms),
            SqlValue::from(property.number_of_bedrooms),
        ],
    )
}
