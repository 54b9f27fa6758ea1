//! Configuration Repository

use jiff_sqlx::{Time as SqlxTime, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::configuration::{data::ConfigurationUpdate, records::ConfigurationRecord};

const GET_CONFIGURATION_SQL: &str = include_str!("sql/get_configuration.sql");
const UPDATE_CONFIGURATION_SQL: &str = include_str!("sql/update_configuration.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgConfigurationRepository;

impl PgConfigurationRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_configuration(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<ConfigurationRecord, sqlx::Error> {
        query_as::<Postgres, ConfigurationRecord>(GET_CONFIGURATION_SQL)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_configuration(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        update: ConfigurationUpdate,
    ) -> Result<ConfigurationRecord, sqlx::Error> {
        query_as::<Postgres, ConfigurationRecord>(UPDATE_CONFIGURATION_SQL)
            .bind(update.delivery_time.map(SqlxTime::from))
            .bind(update.changes_time.map(SqlxTime::from))
            .bind(update.subvention)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ConfigurationRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            delivery_time: row.try_get::<SqlxTime, _>("delivery_time")?.to_jiff(),
            changes_time: row.try_get::<SqlxTime, _>("changes_time")?.to_jiff(),
            subvention: row.try_get("subvention")?,
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
