//! Property records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{checked_minor_units, ValidationError};

/// Row of the `properties` table. `cost_per_night` is in minor units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Property with the mean rating of its reviews, as returned by search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// Property submitted for insertion. `cost_per_night` is in major units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: Decimal,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}

impl NewProperty {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }
        if self.city.trim().is_empty() {
            return Err(ValidationError::Empty { field: "city" });
        }
        if self.cost_per_night.is_sign_negative() {
            return Err(ValidationError::Negative { field: "cost_per_night" });
        }
        // Stored as INTEGER cents.
        if checked_minor_units(self.cost_per_night)
            .filter(|cents| *cents <= Decimal::from(i32::MAX))
            .is_none()
        {
            return Err(ValidationError::OutOfRange { field: "cost_per_night" });
        }
        for (field, count) in [
            ("parking_spaces", self.parking_spaces),
            ("number_of_bathrooms", self.number_of_bathrooms),
            ("number_of_bedrooms", self.number_of_bedrooms),
        ] {
            if count < 0 {
                return Err(ValidationError::Negative { field });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_row() -> serde_json::Value {
        json!({
            "id": 1,
            "owner_id": 2,
            "title": "Speed lamp",
            "description": "description",
            "thumbnail_photo_url": "https://images.example/thumb.jpg",
            "cover_photo_url": "https://images.example/cover.jpg",
            "cost_per_night": 93061,
            "parking_spaces": 6,
            "number_of_bathrooms": 4,
            "number_of_bedrooms": 8,
            "country": "Canada",
            "street": "536 Namsub Highway",
            "city": "Sotboske",
            "province": "Quebec",
            "post_code": "28142",
            "active": true,
            "average_rating": 4.14
        })
    }

    #[test]
    fn listing_flattens_property_columns() {
        let listing: PropertyListing = serde_json::from_value(sample_row()).unwrap();
        assert_eq!(listing.property.id, 1);
        assert_eq!(listing.property.cost_per_night, 93061);
        assert_eq!(listing.average_rating, Some(4.14));
    }

    #[test]
    fn new_property_rejects_blank_title() {
        let mut property: NewProperty = serde_json::from_value(json!({
            "owner_id": 1,
            "title": "Cabin",
            "description": "",
            "thumbnail_photo_url": "",
            "cover_photo_url": "",
            "cost_per_night": "85.50",
            "street": "1 Lake Rd",
            "city": "Banff",
            "province": "Alberta",
            "post_code": "T1L",
            "country": "Canada",
            "parking_spaces": 1,
            "number_of_bathrooms": 1,
            "number_of_bedrooms": 2
        }))
        .unwrap();
        assert!(property.validate().is_ok());

        property.title = "  ".to_string();
        assert_eq!(
            property.validate().unwrap_err(),
            ValidationError::Empty { field: "title" }
        );
    }

    #[test]
    fn new_property_rejects_negative_counts() {
        let mut property: NewProperty = serde_json::from_value(json!({
            "owner_id": 1,
            "title": "Cabin",
            "description": "",
            "thumbnail_photo_url": "",
            "cover_photo_url": "",
            "cost_per_night": 85,
            "street": "1 Lake Rd",
            "city": "Banff",
            "province": "Alberta",
            "post_code": "T1L",
            "country": "Canada",
            "parking_spaces": 1,
            "number_of_bathrooms": 1,
            "number_of_bedrooms": 2
        }))
        .unwrap();
        property.number_of_bedrooms = -1;
        assert_eq!(
            property.validate().unwrap_err(),
            ValidationError::Negative { field: "number_of_bedrooms" }
        );

        property.number_of_bedrooms = 2;
        for cost in [Decimal::MAX, Decimal::from(21_474_837)] {
            property.cost_per_night = cost;
            assert_eq!(
                property.validate().unwrap_err(),
                ValidationError::OutOfRange { field: "cost_per_night" }
            );
        }
        property.cost_per_night = Decimal::from(21_474_836);
        assert!(property.validate().is_ok());
    }
}
