//! Database connection management

use std::num::NonZeroU32;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use sqlx::{PgPool, Postgres, Row, Transaction, migrate::MigrateError, postgres::PgRow};

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction on the shared pool.
    ///
    /// # Errors
    ///
    /// Returns an error when a connection can't be acquired or the transaction can't start.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Apply the embedded schema migrations.
///
/// # Errors
///
/// Returns an error if any migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Read a non-negative minor-unit amount stored as `BIGINT`.
pub(crate) fn try_get_amount(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let amount_i64: i64 = row.try_get(col)?;

    u64::try_from(amount_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

/// Read a line quantity stored as a positive `INTEGER`.
pub(crate) fn try_get_quantity(row: &PgRow, col: &str) -> Result<NonZeroU32, sqlx::Error> {
    let quantity_i32: i32 = row.try_get(col)?;

    u32::try_from(quantity_i32)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| sqlx::Error::ColumnDecode {
            index: col.to_string(),
            source: format!("quantity must be positive, got {quantity_i32}").into(),
        })
}

/// Convert a minor-unit amount into its `BIGINT` column representation.
pub(crate) fn amount_to_i64(amount: u64, col: &str) -> Result<i64, sqlx::Error> {
    i64::try_from(amount).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

/// Narrow a `NUMERIC` aggregate of minor units, saturating at `u64::MAX`.
pub(crate) fn saturating_total(total: Decimal) -> u64 {
    if total.is_sign_negative() {
        return 0;
    }

    total.to_u64().unwrap_or(u64::MAX)
}

/// Convert a line quantity into its `INTEGER` column representation.
pub(crate) fn quantity_to_i32(quantity: NonZeroU32, col: &str) -> Result<i32, sqlx::Error> {
    i32::try_from(quantity.get()).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
