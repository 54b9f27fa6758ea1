//! Create Promotion Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lunchline_app::domain::promotions::{
    data::NewPromotion,
    records::{PromotionRecord, PromotionUuid},
};

use crate::{
    extensions::*,
    money::{format_money, parse_money},
    promotions::errors::into_status_error,
    state::State,
};

/// Create Promotion Request
///
/// The promotion applies from `start_at` inclusive until `end_at` exclusive.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreatePromotionRequest {
    /// Generated when omitted
    pub uuid: Option<Uuid>,
    pub dish_uuid: Uuid,
    /// RFC 3339 instant
    pub start_at: String,
    /// RFC 3339 instant
    pub end_at: String,
    /// Cost of the dish while the promotion is active
    pub cost: String,
}

impl CreatePromotionRequest {
    fn into_new_promotion(self) -> Result<NewPromotion, StatusError> {
        Ok(NewPromotion {
            uuid: self.uuid.map_or_else(PromotionUuid::new, Into::into),
            dish_uuid: self.dish_uuid.into(),
            start_at: parse_instant(&self.start_at, "start_at")?,
            end_at: parse_instant(&self.end_at, "end_at")?,
            cost: parse_money(&self.cost, "cost")?,
        })
    }
}

fn parse_instant(value: &str, field: &str) -> Result<Timestamp, StatusError> {
    value
        .parse::<Timestamp>()
        .or_400(&format!("\"{field}\" must be an RFC 3339 timestamp"))
}

/// Promotion Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromotionResponse {
    pub uuid: Uuid,
    pub dish_uuid: Uuid,
    pub start_at: String,
    pub end_at: String,
    pub cost: String,
    pub created_at: String,
}

impl From<PromotionRecord> for PromotionResponse {
    fn from(promotion: PromotionRecord) -> Self {
        PromotionResponse {
            uuid: promotion.uuid.into(),
            dish_uuid: promotion.dish_uuid.into(),
            start_at: promotion.start_at.to_string(),
            end_at: promotion.end_at.to_string(),
            cost: format_money(promotion.cost),
            created_at: promotion.created_at.to_string(),
        }
    }
}

/// Create Promotion Handler
#[endpoint(
    tags("promotions"),
    summary = "Create Promotion",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Promotion created"),
        (status_code = StatusCode::CONFLICT, description = "Promotion overlaps another"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Administrator access required"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePromotionRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PromotionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let promotion = state
        .app
        .promotions
        .create_promotion(json.into_inner().into_new_promotion()?)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/promotions/{}", promotion.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(promotion.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use lunchline_app::domain::{
        dishes::records::DishUuid,
        promotions::{MockPromotionsService, PromotionsServiceError},
    };

    use crate::test_helpers::{Mocks, TEST_ADMIN, service_as};

    use super::*;

    fn make_service(promotions: MockPromotionsService) -> Service {
        service_as(
            Mocks {
                promotions,
                ..Mocks::default()
            },
            TEST_ADMIN,
            Router::with_path("promotions").post(handler),
        )
    }

    fn body(dish: DishUuid) -> serde_json::Value {
        json!({
            "dish_uuid": dish.into_uuid(),
            "start_at": "2026-03-02T00:00:00Z",
            "end_at": "2026-03-03T00:00:00Z",
            "cost": "3.00",
        })
    }

    #[tokio::test]
    async fn test_create_promotion_success() -> TestResult {
        let dish = DishUuid::new();
        let start_at: Timestamp = "2026-03-02T00:00:00Z".parse()?;
        let end_at: Timestamp = "2026-03-03T00:00:00Z".parse()?;

        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_create_promotion()
            .once()
            .withf(move |promotion| {
                promotion.dish_uuid == dish
                    && promotion.start_at == start_at
                    && promotion.end_at == end_at
                    && promotion.cost == dec!(3)
            })
            .return_once(|promotion| {
                Ok(PromotionRecord {
                    uuid: promotion.uuid,
                    dish_uuid: promotion.dish_uuid,
                    start_at: promotion.start_at,
                    end_at: promotion.end_at,
                    cost: promotion.cost,
                    created_at: promotion.start_at,
                })
            });

        let mut res = TestClient::post("http://example.com/promotions")
            .json(&body(dish))
            .send(&make_service(promotions))
            .await;

        let response: PromotionResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(
            location,
            Some(format!("/promotions/{}", response.uuid).as_str())
        );
        assert_eq!(response.cost, "3.00");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_overlapping_promotion_returns_409() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_create_promotion()
            .once()
            .return_once(|_| Err(PromotionsServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/promotions")
            .json(&body(DishUuid::new()))
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_invalid_promotion_returns_400() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_create_promotion()
            .once()
            .return_once(|_| Err(PromotionsServiceError::InvalidData(None)));

        let res = TestClient::post("http://example.com/promotions")
            .json(&body(DishUuid::new()))
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_promotion_malformed_timestamp_returns_400() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions.expect_create_promotion().never();

        let res = TestClient::post("http://example.com/promotions")
            .json(&json!({
                "dish_uuid": Uuid::now_v7(),
                "start_at": "tomorrow",
                "end_at": "2026-03-03T00:00:00Z",
                "cost": "3.00",
            }))
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
