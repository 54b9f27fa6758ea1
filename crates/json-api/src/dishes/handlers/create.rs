//! Create Dish Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lunchline_app::domain::dishes::{data::NewDish, records::DishUuid};

use crate::{
    dishes::{DishResponse, errors::into_status_error},
    extensions::*,
    money::parse_money,
    state::State,
};

/// Create Dish Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateDishRequest {
    /// Generated when omitted
    pub uuid: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub cost: String,
}

impl CreateDishRequest {
    fn into_new_dish(self) -> Result<NewDish, StatusError> {
        Ok(NewDish {
            uuid: self.uuid.map_or_else(DishUuid::new, Into::into),
            cost: parse_money(&self.cost, "cost")?,
            name: self.name,
            description: self.description,
        })
    }
}

/// Create Dish Handler
#[endpoint(
    tags("dishes"),
    summary = "Create Dish",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Dish created"),
        (status_code = StatusCode::CONFLICT, description = "Dish already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Administrator access required"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateDishRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<DishResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let dish = state
        .app
        .dishes
        .create_dish(json.into_inner().into_new_dish()?)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/dishes/{}", dish.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(dish.into()))
}
