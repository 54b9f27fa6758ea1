//! Save Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lunchline_app::domain::carts::data::NewCartLine;

use crate::{
    cart::{CartResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineRequest {
    pub dish_uuid: Uuid,
    pub quantity: u32,
}

/// Save Cart Request. Replaces every line of the cart.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SaveCartRequest {
    pub lines: Vec<CartLineRequest>,
}

impl From<CartLineRequest> for NewCartLine {
    fn from(request: CartLineRequest) -> Self {
        NewCartLine {
            dish_uuid: request.dish_uuid.into(),
            quantity: request.quantity,
        }
    }
}

/// Save Cart Handler
#[endpoint(
    tags("cart"),
    summary = "Replace Cart Lines",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart saved"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SaveCartRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let lines = json.into_inner().lines.into_iter().map(Into::into).collect();

    let cart = state
        .app
        .carts
        .save_cart(principal.user_uuid, lines)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
