//! Configuration Errors

use salvo::http::StatusError;
use tracing::error;

use lunchline_app::domain::configuration::ConfigurationServiceError;

pub(crate) fn into_status_error(error: ConfigurationServiceError) -> StatusError {
    match error {
        ConfigurationServiceError::MissingRequiredData | ConfigurationServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid configuration payload")
        }
        ConfigurationServiceError::NotFound => {
            error!("kitchen configuration row is missing");

            StatusError::not_found()
        }
        ConfigurationServiceError::Sql(source) => {
            error!("configuration storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
