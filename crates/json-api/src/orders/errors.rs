//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use lunchline_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        closed @ OrdersServiceError::KitchenClosed { .. } => {
            StatusError::conflict().brief(closed.to_string())
        }
        OrdersServiceError::AlreadyExists => StatusError::conflict().brief("Order already exists"),
        OrdersServiceError::NotFound => StatusError::not_found(),
        OrdersServiceError::Forbidden => StatusError::forbidden(),
        OrdersServiceError::InvalidReference => {
            StatusError::bad_request().brief("Order refers to an unknown dish")
        }
        OrdersServiceError::MissingRequiredData | OrdersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid order payload")
        }
        OrdersServiceError::Pricing(source) => {
            StatusError::bad_request().brief(format!("Order could not be priced: {source}"))
        }
        OrdersServiceError::Time(source) => {
            error!("kitchen time error: {source}");

            StatusError::internal_server_error()
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
