//! `?day=YYYY-MM-DD` query parsing.

use jiff::civil::Date;
use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use crate::extensions::*;

pub(crate) trait DayExt {
    fn into_day(self) -> Result<Option<Date>, StatusError>;
}

impl DayExt for QueryParam<String, false> {
    fn into_day(self) -> Result<Option<Date>, StatusError> {
        self.into_inner()
            .map(|value| value.parse::<Date>())
            .transpose()
            .or_400("could not parse \"day\" query parameter")
    }
}
