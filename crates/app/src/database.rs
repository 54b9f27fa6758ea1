//! Database connection management

use std::time::Duration;

use rust_decimal::Decimal;
use sqlx::{
    PgPool, Postgres, Row, Transaction,
    migrate::MigrateError,
    postgres::{PgPoolOptions, PgRow},
};

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction. Dropping it without committing rolls it back.
    ///
    /// # Errors
    ///
    /// Returns an error when a connection cannot be acquired.
    pub async fn begin_transaction(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Pool size used by one-shot CLI commands.
pub const CLI_MAX_CONNECTIONS: u32 = 1;

/// Connection pool sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

impl PoolSettings {
    #[must_use]
    pub fn with_max_connections(max_connections: u32) -> Self {
        Self {
            max_connections: max_connections.max(1),
            ..Self::default()
        }
    }
}

/// Connect to `PostgreSQL` with a single-connection pool.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    connect_with(
        database_url,
        PoolSettings::with_max_connections(CLI_MAX_CONNECTIONS),
    )
    .await
}

/// Connect to `PostgreSQL` using the given pool settings.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_with(
    database_url: &str,
    settings: PoolSettings,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(database_url)
        .await
}

/// Apply pending schema migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Largest quantity an `INTEGER` quantity column holds.
pub const MAX_QUANTITY: u32 = i32::MAX.unsigned_abs();

/// Whether `quantity` is positive and fits its column.
#[must_use]
pub fn quantity_in_range(quantity: u32) -> bool {
    (1..=MAX_QUANTITY).contains(&quantity)
}

/// Largest amount a `NUMERIC(12, 2)` order total holds.
#[must_use]
pub fn max_order_total() -> Decimal {
    Decimal::new(999_999_999_999, 2)
}

/// Convert a line quantity to its `INTEGER` column value.
pub(crate) fn encode_quantity(quantity: u32) -> Result<i32, sqlx::Error> {
    i32::try_from(quantity).map_err(|e| sqlx::Error::ColumnDecode {
        index: "quantity".to_string(),
        source: Box::new(e),
    })
}

/// Read the `quantity` column of a line row.
pub(crate) fn decode_quantity(row: &PgRow) -> Result<u32, sqlx::Error> {
    let quantity: i32 = row.try_get("quantity")?;

    u32::try_from(quantity).map_err(|e| sqlx::Error::ColumnDecode {
        index: "quantity".to_string(),
        source: Box::new(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_size_is_at_least_one() {
        let settings = PoolSettings::with_max_connections(0);

        assert_eq!(settings.max_connections, 1);
        assert_eq!(
            settings.acquire_timeout,
            PoolSettings::default().acquire_timeout
        );
    }

    #[test]
    fn quantities_must_fit_an_integer_column() {
        assert!(!quantity_in_range(0));
        assert!(quantity_in_range(1));
        assert!(quantity_in_range(2_147_483_647));
        assert!(!quantity_in_range(3_000_000_000));
    }

    #[test]
    fn order_total_limit_matches_the_column() {
        assert_eq!(max_order_total().to_string(), "9999999999.99");
    }

    #[test]
    fn pool_size_is_kept_when_positive() {
        assert_eq!(PoolSettings::with_max_connections(25).max_connections, 25);
    }
}
