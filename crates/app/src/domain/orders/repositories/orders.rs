//! Orders Repository

use jiff::civil::Date;
use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use lunchline::pricing::Totals;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::{
    orders::{
        data::OrderDraft,
        records::{OrderRecord, OrderUuid},
    },
    users::records::UserUuid,
};

const LOCK_USER_ORDERS_SQL: &str = include_str!("../sql/lock_user_orders.sql");
const HAS_ORDER_ON_SQL: &str = include_str!("../sql/has_order_on.sql");
const CREATE_ORDER_SQL: &str = include_str!("../sql/create_order.sql");
const GET_ORDER_SQL: &str = include_str!("../sql/get_order.sql");
const LOCK_ORDER_SQL: &str = include_str!("../sql/lock_order.sql");
const LIST_ORDERS_SQL: &str = include_str!("../sql/list_orders.sql");
const UPDATE_ORDER_TOTALS_SQL: &str = include_str!("../sql/update_order_totals.sql");
const DELETE_ORDER_SQL: &str = include_str!("../sql/delete_order.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Serialise order placement for `user` until the transaction ends.
    pub(crate) async fn lock_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<(), sqlx::Error> {
        query(LOCK_USER_ORDERS_SQL)
            .bind(user.to_string())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn has_order_on(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        day: Date,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(HAS_ORDER_ON_SQL)
            .bind(user)
            .bind(SqlxDate::from(day))
            .fetch_one(&mut **tx)
            .await
    }

    /// Insert the order row. The returned record has no lines.
    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        draft: &OrderDraft,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(draft.uuid)
            .bind(draft.user_uuid)
            .bind(SqlxTimestamp::from(draft.delivery_at))
            .bind(SqlxDate::from(draft.delivery_date))
            .bind(draft.totals.cost_total)
            .bind(draft.totals.cost_to_pay)
            .bind(draft.subvention)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Like [`Self::find_order`], holding a row lock until the transaction ends.
    pub(crate) async fn lock_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LOCK_ORDER_SQL)
            .bind(order)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: Option<UserUuid>,
        day: Option<Date>,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .bind(user.map(UserUuid::into_uuid))
            .bind(day.map(SqlxDate::from))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn update_totals(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        totals: Totals,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(UPDATE_ORDER_TOTALS_SQL)
            .bind(order)
            .bind(totals.cost_total)
            .bind(totals.cost_to_pay)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ORDER_SQL)
            .bind(order)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            user_uuid: row.try_get("user_uuid")?,
            delivery_at: row.try_get::<SqlxTimestamp, _>("delivery_at")?.to_jiff(),
            delivery_date: row.try_get::<SqlxDate, _>("delivery_date")?.to_jiff(),
            cost_total: row.try_get("cost_total")?,
            cost_to_pay: row.try_get("cost_to_pay")?,
            subvention: row.try_get("subvention")?,
            lines: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
