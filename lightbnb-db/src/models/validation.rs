//! Validation error types

use std::fmt;

/// Validation error for boundary input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field should hold a number but doesn't parse as one
    InvalidNumber { field: &'static str, value: String },

    /// Numeric field is below zero
    Negative { field: &'static str },

    /// Numeric field is too large to store
    OutOfRange { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidNumber { field, value } => {
                write!(f, "{}: '{}' is not a valid number", field, value)
            }
            Self::Negative { field } => write!(f, "{} cannot be negative", field),
            Self::OutOfRange { field } => write!(f, "{} is out of range", field),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidNumber {
            field: "minimum_price_per_night",
            value: "cheap".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "minimum_price_per_night: 'cheap' is not a valid number"
        );
    }
}
