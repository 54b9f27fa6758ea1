//! Dishes service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use tracing::info;

use crate::{
    clock::Clock,
    database::Db,
    domain::dishes::{
        data::{DishUpdate, NewDish},
        errors::DishesServiceError,
        records::{CurrentCost, DishRecord, DishUuid, DishWithCost},
        repository::PgDishesRepository,
        resolver::PgPriceResolver,
    },
};

#[derive(Debug, Clone)]
pub struct PgDishesService {
    db: Db,
    clock: Arc<dyn Clock>,
    repository: PgDishesRepository,
    resolver: PgPriceResolver,
}

impl PgDishesService {
    #[must_use]
    pub fn new(db: Db, clock: Arc<dyn Clock>) -> Self {
        Self {
            db,
            clock,
            repository: PgDishesRepository::new(),
            resolver: PgPriceResolver::new(),
        }
    }
}

fn is_valid_cost(cost: Decimal) -> bool {
    !cost.is_sign_negative() || cost.is_zero()
}

#[async_trait]
impl DishesService for PgDishesService {
    #[tracing::instrument(
        name = "dishes.service.create_dish",
        skip(self, dish),
        fields(dish_uuid = %dish.uuid),
        err
    )]
    async fn create_dish(&self, dish: NewDish) -> Result<DishRecord, DishesServiceError> {
        if dish.name.trim().is_empty() || !is_valid_cost(dish.cost) {
            return Err(DishesServiceError::InvalidData);
        }

        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_dish(&mut tx, dish).await?;

        tx.commit().await?;

        info!(dish_uuid = %created.uuid, cost = %created.cost, "created dish");

        Ok(created)
    }

    async fn get_dish(&self, dish: DishUuid) -> Result<DishWithCost, DishesServiceError> {
        let at = self.clock.now().timestamp();

        let mut tx = self.db.begin_transaction().await?;

        let record = self
            .repository
            .find_dish(&mut tx, dish)
            .await?
            .ok_or(DishesServiceError::NotFound)?;

        let current = self.resolver.cost_of(&mut tx, &record, at).await?;

        tx.commit().await?;

        Ok(DishWithCost {
            dish: record,
            current,
        })
    }

    #[tracing::instrument(
        name = "dishes.service.update_dish",
        skip(self, update),
        fields(dish_uuid = %dish),
        err
    )]
    async fn update_dish(
        &self,
        dish: DishUuid,
        update: DishUpdate,
    ) -> Result<DishRecord, DishesServiceError> {
        if update.name.as_deref().is_some_and(|name| name.trim().is_empty())
            || update.cost.is_some_and(|cost| !is_valid_cost(cost))
        {
            return Err(DishesServiceError::InvalidData);
        }

        let mut tx = self.db.begin_transaction().await?;

        let updated = self.repository.update_dish(&mut tx, dish, update).await?;

        tx.commit().await?;

        info!(dish_uuid = %updated.uuid, cost = %updated.cost, "updated dish");

        Ok(updated)
    }

    async fn current_cost(&self, dish: DishUuid) -> Result<CurrentCost, DishesServiceError> {
        let at = self.clock.now().timestamp();

        let mut tx = self.db.begin_transaction().await?;

        let current = self
            .resolver
            .current_cost(&mut tx, dish, at)
            .await?
            .ok_or(DishesServiceError::NotFound)?;

        tx.commit().await?;

        Ok(current)
    }
}

#[automock]
#[async_trait]
pub trait DishesService: Send + Sync {
    /// Add a dish to the catalog.
    async fn create_dish(&self, dish: NewDish) -> Result<DishRecord, DishesServiceError>;

    /// Retrieve a dish along with what it costs right now.
    async fn get_dish(&self, dish: DishUuid) -> Result<DishWithCost, DishesServiceError>;

    /// Rename, describe or re-price a dish. Existing order lines are unaffected.
    async fn update_dish(
        &self,
        dish: DishUuid,
        update: DishUpdate,
    ) -> Result<DishRecord, DishesServiceError>;

    /// Cost and name of a dish right now: an active promotion's cost when
    /// there is one, otherwise the dish's own cost.
    async fn current_cost(&self, dish: DishUuid) -> Result<CurrentCost, DishesServiceError>;
}
