//! Promotion Errors

use salvo::http::StatusError;
use tracing::error;

use lunchline_app::domain::promotions::PromotionsServiceError;

pub(crate) fn into_status_error(error: PromotionsServiceError) -> StatusError {
    match error {
        PromotionsServiceError::AlreadyExists => StatusError::conflict()
            .brief("Promotion overlaps another promotion of the same dish"),
        PromotionsServiceError::InvalidReference => {
            StatusError::bad_request().brief("Promotion refers to an unknown dish")
        }
        PromotionsServiceError::InvalidData(Some(source)) => {
            StatusError::bad_request().brief(format!("Invalid promotion: {source}"))
        }
        PromotionsServiceError::MissingRequiredData | PromotionsServiceError::InvalidData(None) => {
            StatusError::bad_request().brief("Invalid promotion payload")
        }
        PromotionsServiceError::NotFound => StatusError::not_found(),
        PromotionsServiceError::Sql(source) => {
            error!("promotion storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
