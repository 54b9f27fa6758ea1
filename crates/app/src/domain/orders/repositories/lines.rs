//! Order Lines Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::{decode_quantity, encode_quantity},
    domain::orders::{
        data::FrozenLine,
        records::{OrderLineRecord, OrderLineUuid, OrderUuid},
    },
};

const CREATE_ORDER_LINE_SQL: &str = include_str!("../sql/create_order_line.sql");
const LIST_ORDER_LINES_SQL: &str = include_str!("../sql/list_order_lines.sql");
const DELETE_ORDER_LINE_SQL: &str = include_str!("../sql/delete_order_line.sql");
const UPDATE_ORDER_LINE_QUANTITY_SQL: &str =
    include_str!("../sql/update_order_line_quantity.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderLinesRepository;

impl PgOrderLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        lines: &[FrozenLine],
    ) -> Result<Vec<OrderLineRecord>, sqlx::Error> {
        let mut created = Vec::with_capacity(lines.len());

        for line in lines {
            let record = query_as::<Postgres, OrderLineRecord>(CREATE_ORDER_LINE_SQL)
                .bind(OrderLineUuid::new())
                .bind(order)
                .bind(line.dish_uuid)
                .bind(&line.name)
                .bind(line.cost_unit)
                .bind(encode_quantity(line.quantity)?)
                .fetch_one(&mut **tx)
                .await?;

            created.push(record);
        }

        Ok(created)
    }

    pub(crate) async fn list_order_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Vec<OrderLineRecord>, sqlx::Error> {
        self.list_lines_for_orders(tx, &[order]).await
    }

    /// Lines of every order in `orders`, grouped by order.
    pub(crate) async fn list_lines_for_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &[OrderUuid],
    ) -> Result<Vec<OrderLineRecord>, sqlx::Error> {
        query_as::<Postgres, OrderLineRecord>(LIST_ORDER_LINES_SQL)
            .bind(orders)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn delete_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        line: OrderLineUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ORDER_LINE_SQL)
            .bind(order)
            .bind(line)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Change a line's quantity. Name and unit cost stay frozen.
    pub(crate) async fn update_line_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        line: OrderLineUuid,
        quantity: u32,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_ORDER_LINE_QUANTITY_SQL)
            .bind(order)
            .bind(line)
            .bind(encode_quantity(quantity)?)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for OrderLineRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            order_uuid: row.try_get("order_uuid")?,
            dish_uuid: row.try_get("dish_uuid")?,
            name: row.try_get("name")?,
            cost_unit: row.try_get("cost_unit")?,
            quantity: decode_quantity(row)?,
        })
    }
}
