//! Remove Order Line Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    orders::{OrderResponse, errors::into_status_error},
    state::State,
};

/// Remove Order Line Handler
#[endpoint(
    tags("orders"),
    summary = "Remove Order Line",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Line removed"),
        (status_code = StatusCode::FORBIDDEN, description = "Order belongs to another user"),
        (status_code = StatusCode::NOT_FOUND, description = "Order or line not found"),
        (status_code = StatusCode::CONFLICT, description = "Kitchen is closed"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    line: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let order = state
        .app
        .orders
        .remove_line(principal, order.into_inner().into(), line.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use lunchline_app::domain::orders::{
        MockOrdersService, OrdersServiceError,
        records::{OrderLineUuid, OrderUuid},
    };

    use crate::{
        orders::handlers::tests::make_empty_order,
        test_helpers::{Mocks, TEST_USER, user_service},
    };

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        user_service(
            Mocks {
                orders,
                ..Mocks::default()
            },
            Router::with_path("orders/{order}/lines/{line}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_remove_last_line_leaves_empty_order() -> TestResult {
        let uuid = OrderUuid::new();
        let line_uuid = OrderLineUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_remove_line()
            .once()
            .withf(move |requester, order, line| {
                *requester == TEST_USER && *order == uuid && *line == line_uuid
            })
            .return_once(move |_, _, _| Ok(make_empty_order(uuid)));

        let mut res = TestClient::delete(format!(
            "http://example.com/orders/{uuid}/lines/{line_uuid}"
        ))
        .send(&make_service(orders))
        .await;

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.lines.is_empty(), "expected no lines");
        assert_eq!(body.cost_total, "0.00");

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_line_forbidden_returns_403() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_remove_line()
            .once()
            .return_once(|_, _, _| Err(OrdersServiceError::Forbidden));

        let res = TestClient::delete(format!(
            "http://example.com/orders/{}/lines/{}",
            OrderUuid::new(),
            OrderLineUuid::new()
        ))
        .send(&make_service(orders))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
