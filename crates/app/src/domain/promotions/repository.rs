//! Promotions Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    dishes::records::DishUuid,
    promotions::{
        data::NewPromotion,
        records::{PromotionRecord, PromotionUuid},
    },
};

const CREATE_PROMOTION_SQL: &str = include_str!("sql/create_promotion.sql");
const LIST_DISH_PROMOTIONS_SQL: &str = include_str!("sql/list_dish_promotions.sql");
const LIST_ACTIVE_PROMOTIONS_SQL: &str = include_str!("sql/list_active_promotions.sql");
const DELETE_PROMOTION_SQL: &str = include_str!("sql/delete_promotion.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPromotionsRepository;

impl PgPromotionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_promotion(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promotion: NewPromotion,
    ) -> Result<PromotionRecord, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(CREATE_PROMOTION_SQL)
            .bind(promotion.uuid)
            .bind(promotion.dish_uuid)
            .bind(SqlxTimestamp::from(promotion.start_at))
            .bind(SqlxTimestamp::from(promotion.end_at))
            .bind(promotion.cost)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_dish_promotions(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        dish: DishUuid,
    ) -> Result<Vec<PromotionRecord>, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(LIST_DISH_PROMOTIONS_SQL)
            .bind(dish)
            .fetch_all(&mut **tx)
            .await
    }

    /// Promotions of `dish` whose window contains `at`.
    pub(crate) async fn list_active_promotions(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        dish: DishUuid,
        at: Timestamp,
    ) -> Result<Vec<PromotionRecord>, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(LIST_ACTIVE_PROMOTIONS_SQL)
            .bind(dish)
            .bind(SqlxTimestamp::from(at))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn delete_promotion(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promotion: PromotionUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PROMOTION_SQL)
            .bind(promotion)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for PromotionRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            dish_uuid: row.try_get("dish_uuid")?,
            start_at: row.try_get::<SqlxTimestamp, _>("start_at")?.to_jiff(),
            end_at: row.try_get::<SqlxTimestamp, _>("end_at")?.to_jiff(),
            cost: row.try_get("cost")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
