//! Statement executor
//!
//! [`Executor`] is the single seam between statement construction and the
//! store: submit a [`Statement`], get rows back as ordered column maps.
//! [`PgExecutor`] is the Postgres implementation over a `PgPool`.

use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{Column, PgPool, Postgres, Row as _, TypeInfo};
use tracing::{debug, error};

use crate::error::StorageError;
use crate::query::{SqlValue, Statement};

/// A result row: column name to value, in select-list order.
pub type Row = serde_json::Map<String, Value>;

/// Submits parameterized statements to a relational store.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&self, statement: &Statement) -> Result<Vec<Row>, StorageError>;
}

/// Postgres executor backed by a connection pool.
///
/// Cloning is cheap; clones share the pool.
#[derive(Debug, Clone)]
pub struct PgExecutor {
    pool: PgPool,
}

impl PgExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Executor for PgExecutor {
    async fn execute(&self, statement: &Statement) -> Result<Vec<Row>, StorageError> {
        let query = statement
            .params()
            .iter()
            .fold(sqlx::query(statement.sql()), bind_value);

        let rows = query.fetch_all(&self.pool).await.map_err(|err| {
            error!(error = %err, "statement failed");
            StorageError::from(err)
        })?;

        debug!(
            params = statement.params().len(),
            rows = rows.len(),
            "statement executed"
        );

        rows.iter().map(decode_row).collect()
    }
}

fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: &'q SqlValue,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        SqlValue::Int(v) => query.bind(*v),
        SqlValue::Float(v) => query.bind(*v),
        SqlValue::Numeric(v) => query.bind(*v),
        SqlValue::Text(v) => query.bind(v.as_str()),
        SqlValue::Date(v) => query.bind(*v),
    }
}

fn decode_row(row: &PgRow) -> Result<Row, StorageError> {
    let mut decoded = Row::new();
    for column in row.columns() {
        let value = decode_column(row, column.ordinal(), column.type_info().name())?;
        decoded.insert(column.name().to_owned(), value);
    }
    Ok(decoded)
}

fn decode_column(row: &PgRow, index: usize, type_name: &str) -> Result<Value, sqlx::Error> {
    let value = match type_name {
        "BOOL" => row.try_get::<Option<bool>, _>(index)?.map(Value::from),
        "INT2" => row.try_get::<Option<i16>, _>(index)?.map(Value::from),
        "INT4" => row.try_get::<Option<i32>, _>(index)?.map(Value::from),
        "INT8" => row.try_get::<Option<i64>, _>(index)?.map(Value::from),
        "FLOAT4" => row.try_get::<Option<f32>, _>(index)?.map(Value::from),
        "FLOAT8" => row.try_get::<Option<f64>, _>(index)?.map(Value::from),
        "NUMERIC" => row
            .try_get::<Option<Decimal>, _>(index)?
            .map(|n| n.to_f64().map_or(Value::Null, Value::from)),
        "DATE" => row
            .try_get::<Option<chrono::NaiveDate>, _>(index)?
            .map(|d| Value::from(d.to_string())),
        "TIMESTAMP" => row
            .try_get::<Option<chrono::NaiveDateTime>, _>(index)?
            .map(|t| Value::from(t.format("%Y-%m-%dT%H:%M:%S%.f").to_string())),
        "TIMESTAMPTZ" => row
            .try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(index)?
            .map(|t| Value::from(t.to_rfc3339())),
        _ => row.try_get::<Option<String>, _>(index)?.map(Value::from),
    };
    Ok(value.unwrap_or(Value::Null))
}
