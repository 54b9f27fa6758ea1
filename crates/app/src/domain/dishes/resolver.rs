//! Catalog Price Resolver
//!
//! Resolves what a dish costs right now. Orders copy the result into their
//! lines, so this is only ever called at write time.

use jiff::Timestamp;
use lunchline::windows::{PromotionWindow, active_window};
use sqlx::{Postgres, Transaction};

use crate::domain::{
    dishes::{
        records::{CurrentCost, DishRecord, DishUuid},
        repository::PgDishesRepository,
    },
    promotions::repository::PgPromotionsRepository,
};

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPriceResolver {
    dishes: PgDishesRepository,
    promotions: PgPromotionsRepository,
}

impl PgPriceResolver {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            dishes: PgDishesRepository::new(),
            promotions: PgPromotionsRepository::new(),
        }
    }

    /// Cost and name of `dish` at `at`, or `None` if the dish does not exist.
    pub(crate) async fn current_cost(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        dish: DishUuid,
        at: Timestamp,
    ) -> Result<Option<CurrentCost>, sqlx::Error> {
        let Some(record) = self.dishes.find_dish(tx, dish).await? else {
            return Ok(None);
        };

        self.cost_of(tx, &record, at).await.map(Some)
    }

    /// Cost of an already loaded dish at `at`.
    pub(crate) async fn cost_of(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        dish: &DishRecord,
        at: Timestamp,
    ) -> Result<CurrentCost, sqlx::Error> {
        let windows = self
            .promotions
            .list_active_promotions(tx, dish.uuid, at)
            .await?
            .iter()
            .map(|promotion| promotion.window())
            .collect::<Result<Vec<PromotionWindow>, _>>()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        let active = active_window(&windows, at);

        Ok(CurrentCost {
            dish_uuid: dish.uuid,
            name: dish.name.clone(),
            cost: active.map_or(dish.cost, PromotionWindow::cost),
            promoted: active.is_some(),
        })
    }
}
