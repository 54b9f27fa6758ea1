//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::{Db, quantity_in_range},
    domain::{
        carts::{
            data::NewCartLine,
            errors::CartsServiceError,
            records::Cart,
            repositories::{PgCartLinesRepository, PgCartsRepository},
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    lines_repository: PgCartLinesRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            lines_repository: PgCartLinesRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, user: UserUuid) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let Some(cart_uuid) = self.carts_repository.find_cart_by_user(&mut tx, user).await? else {
            return Ok(Cart::empty(user));
        };

        let lines = self
            .lines_repository
            .list_cart_lines(&mut tx, cart_uuid)
            .await?;

        tx.commit().await?;

        Ok(Cart {
            uuid: Some(cart_uuid),
            user_uuid: user,
            lines,
        })
    }

    #[tracing::instrument(
        name = "carts.service.save_cart",
        skip(self, lines),
        fields(user_uuid = %user, line_count = lines.len()),
        err
    )]
    async fn save_cart(
        &self,
        user: UserUuid,
        lines: Vec<NewCartLine>,
    ) -> Result<Cart, CartsServiceError> {
        if lines.iter().any(|line| !quantity_in_range(line.quantity)) {
            return Err(CartsServiceError::InvalidData);
        }

        let mut tx = self.db.begin_transaction().await?;

        let cart_uuid = self.carts_repository.upsert_cart(&mut tx, user).await?;

        self.lines_repository
            .delete_cart_lines(&mut tx, cart_uuid)
            .await?;

        let lines = self
            .lines_repository
            .create_cart_lines(&mut tx, cart_uuid, &lines)
            .await?;

        tx.commit().await?;

        info!(cart_uuid = %cart_uuid, line_count = lines.len(), "saved cart");

        Ok(Cart {
            uuid: Some(cart_uuid),
            user_uuid: user,
            lines,
        })
    }

    async fn clear_cart(&self, user: UserUuid) -> Result<Cart, CartsServiceError> {
        self.save_cart(user, Vec::new()).await
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the user's cart. Users without a saved cart get an empty one.
    async fn get_cart(&self, user: UserUuid) -> Result<Cart, CartsServiceError>;

    /// Replace every line of the user's cart with `lines`.
    async fn save_cart(
        &self,
        user: UserUuid,
        lines: Vec<NewCartLine>,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove every line from the user's cart.
    async fn clear_cart(&self, user: UserUuid) -> Result<Cart, CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use crate::{domain::dishes::records::DishUuid, test::TestContext};

    use super::*;

    fn line(dish: DishUuid, quantity: u32) -> NewCartLine {
        NewCartLine {
            dish_uuid: dish,
            quantity,
        }
    }

    #[tokio::test]
    async fn get_cart_without_saved_cart_is_empty() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("empty@example.com", false).await?;

        let cart = ctx.carts.get_cart(user.uuid).await?;

        assert_eq!(cart, Cart::empty(user.uuid), "expected an unsaved empty cart");

        Ok(())
    }

    #[tokio::test]
    async fn save_cart_replaces_all_lines() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("cart@example.com", false).await?;
        let soup = ctx.create_dish("Soup", dec!(3.00)).await?;
        let salad = ctx.create_dish("Salad", dec!(4.00)).await?;

        ctx.carts
            .save_cart(user.uuid, vec![line(soup.uuid, 1), line(salad.uuid, 2)])
            .await?;

        let saved = ctx.carts.save_cart(user.uuid, vec![line(salad.uuid, 5)]).await?;

        assert_eq!(saved.lines.len(), 1, "previous lines should be replaced");

        let cart = ctx.carts.get_cart(user.uuid).await?;

        assert_eq!(cart.uuid, saved.uuid, "cart identity should be stable");
        assert_eq!(cart.lines.len(), 1, "expected exactly one line");
        assert!(
            cart.lines
                .iter()
                .all(|l| l.dish_uuid == salad.uuid && l.quantity == 5),
            "expected only the salad line, got {:?}",
            cart.lines
        );

        Ok(())
    }

    #[tokio::test]
    async fn save_cart_is_idempotent() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("twice@example.com", false).await?;
        let dish = ctx.create_dish("Stew", dec!(5.00)).await?;
        let lines = vec![line(dish.uuid, 2)];

        ctx.carts.save_cart(user.uuid, lines.clone()).await?;
        let first = ctx.carts.get_cart(user.uuid).await?;

        ctx.carts.save_cart(user.uuid, lines).await?;
        let second = ctx.carts.get_cart(user.uuid).await?;

        let summary = |cart: &Cart| {
            cart.lines
                .iter()
                .map(|l| (l.dish_uuid, l.quantity))
                .collect::<Vec<_>>()
        };

        assert_eq!(summary(&first), summary(&second), "saving twice should not duplicate lines");

        Ok(())
    }

    #[tokio::test]
    async fn save_cart_quantity_beyond_column_returns_invalid_data() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("bulk@example.com", false).await?;
        let dish = ctx.create_dish("Rice", dec!(2.00)).await?;

        let result = ctx
            .carts
            .save_cart(user.uuid, vec![line(dish.uuid, 3_000_000_000)])
            .await;

        assert!(
            matches!(result, Err(CartsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn save_cart_zero_quantity_returns_invalid_data() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("zero@example.com", false).await?;
        let dish = ctx.create_dish("Rice", dec!(2.00)).await?;

        let result = ctx.carts.save_cart(user.uuid, vec![line(dish.uuid, 0)]).await;

        assert!(
            matches!(result, Err(CartsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn save_cart_unknown_dish_returns_invalid_reference_and_keeps_lines() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("ref@example.com", false).await?;
        let dish = ctx.create_dish("Beans", dec!(2.50)).await?;

        ctx.carts.save_cart(user.uuid, vec![line(dish.uuid, 1)]).await?;

        let result = ctx
            .carts
            .save_cart(user.uuid, vec![line(DishUuid::new(), 1)])
            .await;

        assert!(
            matches!(result, Err(CartsServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );

        let cart = ctx.carts.get_cart(user.uuid).await?;

        assert_eq!(cart.lines.len(), 1, "failed save must roll back");

        Ok(())
    }

    #[tokio::test]
    async fn clear_cart_removes_lines() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("clear@example.com", false).await?;
        let dish = ctx.create_dish("Flan", dec!(1.50)).await?;

        ctx.carts.save_cart(user.uuid, vec![line(dish.uuid, 3)]).await?;

        let cleared = ctx.carts.clear_cart(user.uuid).await?;

        assert!(cleared.lines.is_empty(), "cleared cart has no lines");
        assert!(cleared.uuid.is_some(), "cleared cart is persisted");

        Ok(())
    }

    #[tokio::test]
    async fn clear_cart_without_saved_cart_creates_empty_cart() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("fresh@example.com", false).await?;

        let cleared = ctx.carts.clear_cart(user.uuid).await?;

        assert!(cleared.lines.is_empty(), "cleared cart has no lines");
        assert!(cleared.uuid.is_some(), "cart row should be created");

        Ok(())
    }
}
