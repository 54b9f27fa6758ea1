//! Get Configuration Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    configuration::{ConfigurationResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Get Configuration Handler
#[endpoint(
    tags("configuration"),
    summary = "Get Kitchen Configuration",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Kitchen configuration"),
        (status_code = StatusCode::FORBIDDEN, description = "Administrator access required"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ConfigurationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let configuration = state
        .app
        .configuration
        .get_configuration()
        .await
        .map_err(into_status_error)?;

    Ok(Json(configuration.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use lunchline_app::domain::configuration::MockConfigurationService;

    use crate::test_helpers::{Mocks, TEST_ADMIN, service_as};

    use super::{super::tests::make_configuration, *};

    #[tokio::test]
    async fn test_get_configuration_formats_times_and_money() -> TestResult {
        let mut configuration = MockConfigurationService::new();

        configuration
            .expect_get_configuration()
            .once()
            .return_once(|| Ok(make_configuration()));

        let service = service_as(
            Mocks {
                configuration,
                ..Mocks::default()
            },
            TEST_ADMIN,
            Router::with_path("configuration").get(handler),
        );

        let mut res = TestClient::get("http://example.com/configuration")
            .send(&service)
            .await;

        let body: ConfigurationResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.delivery_time, "13:00");
        assert_eq!(body.changes_time, "10:30");
        assert_eq!(body.subvention, "2.00");

        Ok(())
    }
}
