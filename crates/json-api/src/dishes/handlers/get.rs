//! Get Dish Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lunchline_app::domain::dishes::records::DishWithCost;

use crate::{
    dishes::{DishResponse, errors::into_status_error},
    extensions::*,
    money::format_money,
    state::State,
};

/// Dish Detail Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DishDetailResponse {
    pub dish: DishResponse,
    /// What the dish costs right now
    pub current_cost: String,
    /// Whether `current_cost` comes from an active promotion
    pub promoted: bool,
}

impl From<DishWithCost> for DishDetailResponse {
    fn from(value: DishWithCost) -> Self {
        DishDetailResponse {
            current_cost: format_money(value.current.cost),
            promoted: value.current.promoted,
            dish: value.dish.into(),
        }
    }
}

/// Get Dish Handler
#[endpoint(
    tags("dishes"),
    summary = "Get Dish",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Dish found"),
        (status_code = StatusCode::NOT_FOUND, description = "Dish not found"),
    ),
)]
pub(crate) async fn handler(
    dish: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<DishDetailResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let dish = state
        .app
        .dishes
        .get_dish(dish.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(dish.into()))
}
