//! Promotions service errors.

use lunchline::windows::WindowError;
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromotionsServiceError {
    /// Another promotion of the same dish overlaps the requested window.
    #[error("promotion overlaps an existing promotion")]
    AlreadyExists,

    #[error("promotion not found")]
    NotFound,

    #[error("dish not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid promotion window")]
    InvalidData(#[source] Option<WindowError>),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<WindowError> for PromotionsServiceError {
    fn from(error: WindowError) -> Self {
        Self::InvalidData(Some(error))
    }
}

impl From<Error> for PromotionsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData(None),
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
