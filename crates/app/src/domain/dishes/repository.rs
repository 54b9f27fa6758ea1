//! Dishes Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::dishes::{
    data::{DishUpdate, NewDish},
    records::{DishRecord, DishUuid},
};

const CREATE_DISH_SQL: &str = include_str!("sql/create_dish.sql");
const GET_DISH_SQL: &str = include_str!("sql/get_dish.sql");
const LOCK_DISH_SQL: &str = include_str!("sql/lock_dish.sql");
const UPDATE_DISH_SQL: &str = include_str!("sql/update_dish.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgDishesRepository;

impl PgDishesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_dish(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        dish: NewDish,
    ) -> Result<DishRecord, sqlx::Error> {
        query_as::<Postgres, DishRecord>(CREATE_DISH_SQL)
            .bind(dish.uuid)
            .bind(dish.name)
            .bind(dish.description)
            .bind(dish.cost)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_dish(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        dish: DishUuid,
    ) -> Result<Option<DishRecord>, sqlx::Error> {
        query_as::<Postgres, DishRecord>(GET_DISH_SQL)
            .bind(dish)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Lock the dish row until the transaction ends.
    pub(crate) async fn lock_dish(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        dish: DishUuid,
    ) -> Result<Option<DishRecord>, sqlx::Error> {
        query_as::<Postgres, DishRecord>(LOCK_DISH_SQL)
            .bind(dish)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn update_dish(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        dish: DishUuid,
        update: DishUpdate,
    ) -> Result<DishRecord, sqlx::Error> {
        query_as::<Postgres, DishRecord>(UPDATE_DISH_SQL)
            .bind(dish)
            .bind(update.name)
            .bind(update.description)
            .bind(update.cost)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for DishRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            cost: row.try_get("cost")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
