//! Configuration service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::configuration::{
        data::ConfigurationUpdate, errors::ConfigurationServiceError,
        records::ConfigurationRecord, repository::PgConfigurationRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgConfigurationService {
    db: Db,
    repository: PgConfigurationRepository,
}

impl PgConfigurationService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgConfigurationRepository::new(),
        }
    }
}

#[async_trait]
impl ConfigurationService for PgConfigurationService {
    async fn get_configuration(&self) -> Result<ConfigurationRecord, ConfigurationServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let configuration = self.repository.get_configuration(&mut tx).await?;

        tx.commit().await?;

        Ok(configuration)
    }

    #[tracing::instrument(
        name = "configuration.service.update_configuration",
        skip(self),
        err
    )]
    async fn update_configuration(
        &self,
        update: ConfigurationUpdate,
    ) -> Result<ConfigurationRecord, ConfigurationServiceError> {
        if update.subvention.is_some_and(|s| s.is_sign_negative() && !s.is_zero()) {
            return Err(ConfigurationServiceError::InvalidData);
        }

        let mut tx = self.db.begin_transaction().await?;

        let configuration = if update.is_empty() {
            self.repository.get_configuration(&mut tx).await?
        } else {
            self.repository.update_configuration(&mut tx, update).await?
        };

        tx.commit().await?;

        info!(
            delivery_time = %configuration.delivery_time,
            changes_time = %configuration.changes_time,
            subvention = %configuration.subvention,
            "updated configuration"
        );

        Ok(configuration)
    }
}

#[automock]
#[async_trait]
pub trait ConfigurationService: Send + Sync {
    /// Read the kitchen configuration.
    async fn get_configuration(&self) -> Result<ConfigurationRecord, ConfigurationServiceError>;

    /// Apply the supplied fields and return the refreshed configuration.
    async fn update_configuration(
        &self,
        update: ConfigurationUpdate,
    ) -> Result<ConfigurationRecord, ConfigurationServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::time;
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn get_configuration_returns_seeded_row() -> TestResult {
        let ctx = TestContext::new().await;

        let configuration = ctx.configuration.get_configuration().await?;

        assert!(
            configuration.subvention >= dec!(0),
            "seeded subvention must not be negative"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_configuration_applies_only_supplied_fields() -> TestResult {
        let ctx = TestContext::new().await;

        let before = ctx.configuration.get_configuration().await?;

        let updated = ctx
            .configuration
            .update_configuration(ConfigurationUpdate {
                changes_time: Some(time(14, 0, 0, 0)),
                subvention: Some(dec!(2.50)),
                ..ConfigurationUpdate::default()
            })
            .await?;

        assert_eq!(updated.changes_time, time(14, 0, 0, 0), "changes_time mismatch");
        assert_eq!(updated.subvention, dec!(2.50), "subvention mismatch");
        assert_eq!(
            updated.delivery_time, before.delivery_time,
            "delivery_time should be untouched"
        );

        let fetched = ctx.configuration.get_configuration().await?;

        assert_eq!(fetched, updated, "read should reflect the update");

        Ok(())
    }

    #[tokio::test]
    async fn update_configuration_rejects_negative_subvention() -> TestResult {
        let ctx = TestContext::new().await;

        let before = ctx.configuration.get_configuration().await?;

        let result = ctx
            .configuration
            .update_configuration(ConfigurationUpdate {
                subvention: Some(dec!(-1.00)),
                ..ConfigurationUpdate::default()
            })
            .await;

        assert!(
            matches!(result, Err(ConfigurationServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );

        let after = ctx.configuration.get_configuration().await?;

        assert_eq!(after.subvention, before.subvention, "subvention must be unchanged");

        Ok(())
    }

    #[tokio::test]
    async fn get_configuration_missing_row_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        sqlx::query("DELETE FROM configuration")
            .execute(ctx.db.pool())
            .await?;

        let result = ctx.configuration.get_configuration().await;

        assert!(
            matches!(result, Err(ConfigurationServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }
}
