//! List Orders Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use lunchline_app::domain::orders::data::OrderFilter;

use crate::{
    extensions::*,
    orders::{OrderResponse, errors::into_status_error},
    state::State,
};

/// Orders List Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersListResponse {
    pub orders: Vec<OrderResponse>,
}

/// List Orders Handler
///
/// Lists the caller's orders, newest delivery day first. Administrators see
/// every user's orders.
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Orders"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed day"),
    ),
)]
pub(crate) async fn handler(
    day: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<OrdersListResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let filter = OrderFilter {
        day: day.into_day()?,
    };

    let orders = state
        .app
        .orders
        .list_orders(principal, filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrdersListResponse {
        orders: orders.into_iter().map(Into::into).collect(),
    }))
}
