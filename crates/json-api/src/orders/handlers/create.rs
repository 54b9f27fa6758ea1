//! Create Order Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use crate::{
    extensions::*,
    orders::{OrderResponse, errors::into_status_error},
    state::State,
};

/// Create Order Handler
///
/// Places an order from the caller's cart and empties the cart. The first
/// order of the day receives the configured subvention.
#[endpoint(
    tags("orders"),
    summary = "Place Order From Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Cart refers to an unknown dish"),
        (status_code = StatusCode::CONFLICT, description = "Kitchen is closed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let order = state
        .app
        .orders
        .create_from_cart(principal.user_uuid)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, tz::TimeZone};
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use lunchline_app::domain::orders::{
        MockOrdersService, OrdersServiceError, records::OrderUuid,
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
            Router::with_path("orders").post(handler),
        )
    }

    #[tokio::test]
    async fn test_create_order_success() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_create_from_cart()
            .once()
            .withf(|user| *user == TEST_USER.user_uuid)
            .return_once(move |_| Ok(make_order(uuid)));

        let mut res = TestClient::post("http://example.com/orders")
            .send(&make_service(orders))
            .await;

        let body: OrderResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/orders/{uuid}").as_str()));
        assert_eq!(body.cost_total, "9.00");
        assert_eq!(body.cost_to_pay, "7.00");
        assert_eq!(body.subvention, "2.00");
        assert_eq!(body.delivery_date, "2026-03-02");
        assert_eq!(
            body.lines.iter().map(|l| l.cost_unit.as_str()).collect::<Vec<_>>(),
            ["4.50"]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_after_cutoff_returns_409() -> TestResult {
        let cutoff = date(2026, 3, 2).at(14, 0, 0, 0).to_zoned(TimeZone::UTC)?;

        let mut orders = MockOrdersService::new();

        orders
            .expect_create_from_cart()
            .once()
            .return_once(move |_| Err(OrdersServiceError::KitchenClosed { cutoff }));

        let mut res = TestClient::post("http://example.com/orders")
            .send(&make_service(orders))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
        assert!(body.contains("14:00"), "expected the cutoff in {body}");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_unknown_dish_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_from_cart()
            .once()
            .return_once(|_| Err(OrdersServiceError::InvalidReference));

        let res = TestClient::post("http://example.com/orders")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
