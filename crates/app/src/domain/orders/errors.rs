//! Orders service errors.

use jiff::Zoned;
use lunchline::{pricing::PricingError, schedule::ScheduleError};
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    /// Orders can no longer be placed or changed today.
    #[error("kitchen is closed, changes are not allowed after {}", .cutoff.strftime("%H:%M"))]
    KitchenClosed { cutoff: Zoned },

    #[error("order already exists")]
    AlreadyExists,

    #[error("order not found")]
    NotFound,

    /// The order belongs to another user.
    #[error("order belongs to another user")]
    Forbidden,

    #[error("dish not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("order could not be priced")]
    Pricing(#[from] PricingError),

    #[error("kitchen time could not be computed")]
    Time(#[source] jiff::Error),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<ScheduleError> for OrdersServiceError {
    fn from(error: ScheduleError) -> Self {
        match error {
            ScheduleError::KitchenClosed { cutoff } => Self::KitchenClosed { cutoff },
            ScheduleError::Time(error) => Self::Time(error),
        }
    }
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        // numeric_value_out_of_range
        if error
            .as_database_error()
            .and_then(DatabaseError::code)
            .is_some_and(|code| code == "22003")
        {
            return Self::InvalidData;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
