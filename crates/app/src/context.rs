//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    clock::Clock,
    database::{self, Db, PoolSettings},
    domain::{
        carts::{CartsService, PgCartsService},
        configuration::{ConfigurationService, PgConfigurationService},
        dishes::{DishesService, PgDishesService},
        orders::{OrdersService, PgOrdersService},
        promotions::{PgPromotionsService, PromotionsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub configuration: Arc<dyn ConfigurationService>,
    pub dishes: Arc<dyn DishesService>,
    pub promotions: Arc<dyn PromotionsService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL, applying any pending
    /// migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating
    /// the schema fails.
    pub async fn from_database_url(
        url: &str,
        pool_settings: PoolSettings,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect_with(url, pool_settings)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        Ok(Self::from_db(&Db::new(pool), clock))
    }

    #[must_use]
    pub fn from_db(db: &Db, clock: Arc<dyn Clock>) -> Self {
        Self {
            configuration: Arc::new(PgConfigurationService::new(db.clone())),
            dishes: Arc::new(PgDishesService::new(db.clone(), clock.clone())),
            promotions: Arc::new(PgPromotionsService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone(), clock)),
            auth: Arc::new(PgAuthService::new(db.clone())),
        }
    }
}
