//! Promotions Service

use async_trait::async_trait;
use lunchline::windows::PromotionWindow;
use mockall::automock;
use tracing::{Span, info};

use crate::{
    database::Db,
    domain::{
        dishes::repository::PgDishesRepository,
        promotions::{
            PromotionsServiceError,
            data::NewPromotion,
            records::{PromotionRecord, PromotionUuid},
            repository::PgPromotionsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgPromotionsService {
    db: Db,
    dishes: PgDishesRepository,
    promotions: PgPromotionsRepository,
}

impl PgPromotionsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            dishes: PgDishesRepository::new(),
            promotions: PgPromotionsRepository::new(),
        }
    }
}

#[async_trait]
impl PromotionsService for PgPromotionsService {
    #[tracing::instrument(
        name = "promotions.service.create_promotion",
        skip(self, promotion),
        fields(
            promotion_uuid = %promotion.uuid,
            dish_uuid = %promotion.dish_uuid,
            existing_count = tracing::field::Empty
        ),
        err
    )]
    async fn create_promotion(
        &self,
        promotion: NewPromotion,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        let window = PromotionWindow::new(promotion.start_at, promotion.end_at, promotion.cost)?;

        let mut tx = self.db.begin_transaction().await?;

        // Serialises promotion writes per dish so the overlap check holds.
        self.dishes
            .lock_dish(&mut tx, promotion.dish_uuid)
            .await?
            .ok_or(PromotionsServiceError::InvalidReference)?;

        let existing = self
            .promotions
            .list_dish_promotions(&mut tx, promotion.dish_uuid)
            .await?;

        Span::current().record("existing_count", tracing::field::display(existing.len()));

        for other in &existing {
            if other.window()?.overlaps(&window) {
                return Err(PromotionsServiceError::AlreadyExists);
            }
        }

        let record = self.promotions.create_promotion(&mut tx, promotion).await?;

        tx.commit().await?;

        info!(promotion_uuid = %record.uuid, "created promotion");

        Ok(record)
    }

    #[tracing::instrument(
        name = "promotions.service.delete_promotion",
        skip(self),
        fields(promotion_uuid = %promotion),
        err
    )]
    async fn delete_promotion(
        &self,
        promotion: PromotionUuid,
    ) -> Result<(), PromotionsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.promotions.delete_promotion(&mut tx, promotion).await?;

        if rows_affected == 0 {
            return Err(PromotionsServiceError::NotFound);
        }

        tx.commit().await?;

        info!(promotion_uuid = %promotion, "deleted promotion");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait PromotionsService: Send + Sync {
    /// Create a promotion. Fails with `AlreadyExists` when its window overlaps
    /// another promotion of the same dish.
    async fn create_promotion(
        &self,
        promotion: NewPromotion,
    ) -> Result<PromotionRecord, PromotionsServiceError>;

    async fn delete_promotion(
        &self,
        promotion: PromotionUuid,
    ) -> Result<(), PromotionsServiceError>;
}
