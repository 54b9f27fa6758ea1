//! Subvention Preview Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, money::format_money, orders::errors::into_status_error, state::State};

/// Subvention Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubventionResponse {
    /// Subvention the caller's next order today would receive
    pub subvention: String,
}

/// Subvention Preview Handler
#[endpoint(
    tags("orders"),
    summary = "Preview Subvention",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Subvention for the next order"),
        (status_code = StatusCode::CONFLICT, description = "Kitchen is closed"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<SubventionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let subvention = state
        .app
        .orders
        .subvention_preview(principal.user_uuid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(SubventionResponse {
        subvention: format_money(subvention),
    }))
}
