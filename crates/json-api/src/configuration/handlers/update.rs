//! Update Configuration Handler

use std::sync::Arc;

use jiff::civil::Time;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use lunchline_app::domain::configuration::data::ConfigurationUpdate;

use crate::{
    configuration::{ConfigurationResponse, errors::into_status_error},
    extensions::*,
    money::parse_money,
    state::State,
};

/// Update Configuration Request. Omitted fields are left unchanged.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateConfigurationRequest {
    /// `HH:MM`
    pub delivery_time: Option<String>,
    /// `HH:MM`
    pub changes_time: Option<String>,
    pub subvention: Option<String>,
}

impl UpdateConfigurationRequest {
    fn into_update(self) -> Result<ConfigurationUpdate, StatusError> {
        Ok(ConfigurationUpdate {
            delivery_time: parse_time(self.delivery_time, "delivery_time")?,
            changes_time: parse_time(self.changes_time, "changes_time")?,
            subvention: self
                .subvention
                .map(|value| parse_money(&value, "subvention"))
                .transpose()?,
        })
    }
}

fn parse_time(value: Option<String>, field: &str) -> Result<Option<Time>, StatusError> {
    value
        .map(|value| value.trim().parse::<Time>())
        .transpose()
        .or_400(&format!("\"{field}\" must be a time like 14:00"))
}

/// Update Configuration Handler
#[endpoint(
    tags("configuration"),
    summary = "Update Kitchen Configuration",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Configuration updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Administrator access required"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateConfigurationRequest>,
    depot: &mut Depot,
) -> Result<Json<ConfigurationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let update = json.into_inner().into_update()?;

    let configuration = state
        .app
        .configuration
        .update_configuration(update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(configuration.into()))
}
