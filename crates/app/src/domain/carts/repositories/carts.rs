//! Carts Repository

use sqlx::{Postgres, Transaction, query_scalar};

use crate::domain::{carts::records::CartUuid, users::records::UserUuid};

const FIND_CART_BY_USER_SQL: &str = include_str!("../sql/find_cart_by_user.sql");
const LOCK_CART_BY_USER_SQL: &str = include_str!("../sql/lock_cart_by_user.sql");
const UPSERT_CART_SQL: &str = include_str!("../sql/upsert_cart.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_cart_by_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Option<CartUuid>, sqlx::Error> {
        query_scalar::<Postgres, CartUuid>(FIND_CART_BY_USER_SQL)
            .bind(user)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Find the user's cart and hold its row lock until the transaction ends.
    /// Saving the same cart waits for the lock.
    pub(crate) async fn lock_cart_by_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Option<CartUuid>, sqlx::Error> {
        query_scalar::<Postgres, CartUuid>(LOCK_CART_BY_USER_SQL)
            .bind(user)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Return the user's cart, creating it if it does not exist yet.
    pub(crate) async fn upsert_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<CartUuid, sqlx::Error> {
        query_scalar::<Postgres, CartUuid>(UPSERT_CART_SQL)
            .bind(CartUuid::new())
            .bind(user)
            .fetch_one(&mut **tx)
            .await
    }
}
