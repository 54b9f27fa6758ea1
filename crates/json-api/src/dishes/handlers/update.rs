//! Update Dish Handler

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

use lunchline_app::domain::dishes::data::DishUpdate;

use crate::{
    dishes::{DishResponse, errors::into_status_error},
    extensions::*,
    money::parse_money,
    state::State,
};

/// Update Dish Request. Omitted fields are left unchanged.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateDishRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cost: Option<String>,
}

impl UpdateDishRequest {
    fn into_update(self) -> Result<DishUpdate, StatusError> {
        Ok(DishUpdate {
            cost: self
                .cost
                .map(|value| parse_money(&value, "cost"))
                .transpose()?,
            name: self.name,
            description: self.description,
        })
    }
}

/// Update Dish Handler
///
/// Orders already placed keep the name and cost they were ordered with.
#[endpoint(
    tags("dishes"),
    summary = "Update Dish",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Dish updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Dish not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Administrator access required"),
    ),
)]
#[tracing::instrument(
    name = "dishes.update",
    skip(dish, json, depot),
    fields(dish_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    dish: PathParam<Uuid>,
    json: JsonBody<UpdateDishRequest>,
    depot: &mut Depot,
) -> Result<Json<DishResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let dish = dish.into_inner();

    tracing::Span::current().record("dish_uuid", tracing::field::display(dish));

    let updated = state
        .app
        .dishes
        .update_dish(dish.into(), json.into_inner().into_update()?)
        .await
        .map_err(into_status_error)?;

    tracing::info!(dish_uuid = %dish, "updated dish");

    Ok(Json(updated.into()))
}
