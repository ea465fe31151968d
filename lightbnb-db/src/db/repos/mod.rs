//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows an injected executor (Postgres in production, fakes in tests)
//! - Builds its statement with `crate::query`, then decodes rows with serde
//! - "No rows" is `Ok(None)` / an empty `Vec`, never an error

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::PropertyRepo;
pub use reservations::ReservationRepo;
pub use users::UserRepo;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::Row;
use crate::error::DbError;

/// Decode every row into `T`.
pub(crate) fn decode_all<T: DeserializeOwned>(
    rows: Vec<Row>,
    record: &'static str,
) -> Result<Vec<T>, DbError> {
    rows.into_iter().map(|row| decode(row, record)).collect()
}

/// Decode the first row into `T`, if there is one.
pub(crate) fn decode_first<T: DeserializeOwned>(
    rows: Vec<Row>,
    record: &'static str,
) -> Result<Option<T>, DbError> {
    rows.into_iter().next().map(|row| decode(row, record)).transpose()
}

fn decode<T: DeserializeOwned>(row: Row, record: &'static str) -> Result<T, DbError> {
    serde_json::from_value(Value::Object(row)).map_err(|source| DbError::Decode { record, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pair {
        id: i32,
        name: String,
    }

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn decode_first_on_empty_is_none() {
        let decoded: Option<Pair> = decode_first(vec![], "pair").unwrap();
        assert!(decoded.is_none());
    }

    #[test]
    fn decode_all_keeps_row_order() {
        let rows = vec![
            row(json!({"id": 2, "name": "b"})),
            row(json!({"id": 1, "name": "a"})),
        ];
        let decoded: Vec<Pair> = decode_all(rows, "pair").unwrap();
        assert_eq!(decoded.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn shape_mismatch_is_decode_error() {
        let rows = vec![row(json!({"id": "not a number", "name": "a"}))];
        let err = decode_all::<Pair>(rows, "pair").unwrap_err();
        assert!(matches!(err, DbError::Decode { record: "pair", .. }));
    }
}
