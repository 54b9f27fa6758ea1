//! Modify Order Line Handler

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

use crate::{
    extensions::*,
    orders::{OrderResponse, errors::into_status_error},
    state::State,
};

/// Modify Order Line Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ModifyOrderLineRequest {
    pub quantity: u32,
}

/// Modify Order Line Handler
///
/// Changes the quantity. The unit cost the line was ordered at is kept.
#[endpoint(
    tags("orders"),
    summary = "Modify Order Line Quantity",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Line updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Order belongs to another user"),
        (status_code = StatusCode::NOT_FOUND, description = "Order or line not found"),
        (status_code = StatusCode::CONFLICT, description = "Kitchen is closed"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    line: PathParam<Uuid>,
    json: JsonBody<ModifyOrderLineRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let order = state
        .app
        .orders
        .modify_line_quantity(
            principal,
            order.into_inner().into(),
            line.into_inner().into(),
            json.into_inner().quantity,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}
