//! Add Order Line Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lunchline_app::domain::orders::data::NewOrderLine;

use crate::{
    extensions::*,
    orders::{OrderResponse, errors::into_status_error},
    state::State,
};

/// Add Order Line Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddOrderLineRequest {
    pub dish_uuid: Uuid,
    pub quantity: u32,
}

impl From<AddOrderLineRequest> for NewOrderLine {
    fn from(request: AddOrderLineRequest) -> Self {
        NewOrderLine {
            dish_uuid: request.dish_uuid.into(),
            quantity: request.quantity,
        }
    }
}

/// Add Order Line Handler
///
/// The line is priced at the dish's current cost.
#[endpoint(
    tags("orders"),
    summary = "Add Order Line",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Line added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Order belongs to another user"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::CONFLICT, description = "Kitchen is closed"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<AddOrderLineRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let order = state
        .app
        .orders
        .add_line(principal, order.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, tz::TimeZone};
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use lunchline_app::domain::{
        dishes::records::DishUuid,
        orders::{MockOrdersService, OrdersServiceError, records::OrderUuid},
    };

    use crate::{
        orders::handlers::tests::make_order,
        test_helpers::{Mocks, TEST_USER, user_service},
    };

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        user_service(
            Mocks {
                orders,
                ..Mocks::default()
            },
            Router::with_path("orders/{order}/lines").post(handler),
        )
    }

    #[tokio::test]
    async fn test_add_line_success() -> TestResult {
        let uuid = OrderUuid::new();
        let dish = DishUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_add_line()
            .once()
            .withf(move |requester, order, line| {
                *requester == TEST_USER
                    && *order == uuid
                    && *line
                        == NewOrderLine {
                            dish_uuid: dish,
                            quantity: 2,
                        }
            })
            .return_once(move |_, _, _| Ok(make_order(uuid)));

        let mut res = TestClient::post(format!("http://example.com/orders/{uuid}/lines"))
            .json(&json!({ "dish_uuid": dish.into_uuid(), "quantity": 2 }))
            .send(&make_service(orders))
            .await;

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.uuid, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_add_line_after_cutoff_returns_409() -> TestResult {
        let cutoff = date(2026, 3, 2).at(14, 0, 0, 0).to_zoned(TimeZone::UTC)?;

        let mut orders = MockOrdersService::new();

        orders
            .expect_add_line()
            .once()
            .return_once(move |_, _, _| Err(OrdersServiceError::KitchenClosed { cutoff }));

        let res = TestClient::post(format!("http://example.com/orders/{}/lines", OrderUuid::new()))
            .json(&json!({ "dish_uuid": DishUuid::new().into_uuid(), "quantity": 1 }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_line_zero_quantity_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_add_line()
            .once()
            .return_once(|_, _, _| Err(OrdersServiceError::InvalidData));

        let res = TestClient::post(format!("http://example.com/orders/{}/lines", OrderUuid::new()))
            .json(&json!({ "dish_uuid": DishUuid::new().into_uuid(), "quantity": 0 }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
