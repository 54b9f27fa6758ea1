//! Dish Errors

use salvo::http::StatusError;
use tracing::error;

use lunchline_app::domain::dishes::DishesServiceError;

pub(crate) fn into_status_error(error: DishesServiceError) -> StatusError {
    match error {
        DishesServiceError::AlreadyExists => {
            StatusError::conflict().brief("A dish with this name already exists")
        }
        DishesServiceError::InvalidReference
        | DishesServiceError::MissingRequiredData
        | DishesServiceError::InvalidData => StatusError::bad_request().brief("Invalid dish payload"),
        DishesServiceError::NotFound => StatusError::not_found(),
        DishesServiceError::Sql(source) => {
            error!("dish storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
