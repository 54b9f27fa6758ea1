//! Cart Lines Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::{decode_quantity, encode_quantity},
    domain::carts::{
        data::NewCartLine,
        records::{CartLineRecord, CartLineUuid, CartUuid},
    },
};

const LIST_CART_LINES_SQL: &str = include_str!("../sql/list_cart_lines.sql");
const CREATE_CART_LINE_SQL: &str = include_str!("../sql/create_cart_line.sql");
const DELETE_CART_LINES_SQL: &str = include_str!("../sql/delete_cart_lines.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartLinesRepository;

impl PgCartLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_cart_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Vec<CartLineRecord>, sqlx::Error> {
        query_as::<Postgres, CartLineRecord>(LIST_CART_LINES_SQL)
            .bind(cart)
            .fetch_all(&mut **tx)
            .await
    }

    /// Insert `lines` in order, after any lines already in the cart.
    pub(crate) async fn create_cart_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        lines: &[NewCartLine],
    ) -> Result<Vec<CartLineRecord>, sqlx::Error> {
        let mut created = Vec::with_capacity(lines.len());

        for (position, line) in lines.iter().enumerate() {
            let position = i32::try_from(position).map_err(|e| sqlx::Error::ColumnDecode {
                index: "position".to_string(),
                source: Box::new(e),
            })?;

            let record = query_as::<Postgres, CartLineRecord>(CREATE_CART_LINE_SQL)
                .bind(CartLineUuid::new())
                .bind(cart)
                .bind(line.dish_uuid)
                .bind(encode_quantity(line.quantity)?)
                .bind(position)
                .fetch_one(&mut **tx)
                .await?;

            created.push(record);
        }

        Ok(created)
    }

    pub(crate) async fn delete_cart_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_LINES_SQL)
            .bind(cart)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartLineRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            dish_uuid: row.try_get("dish_uuid")?,
            quantity: decode_quantity(row)?,
        })
    }
}
