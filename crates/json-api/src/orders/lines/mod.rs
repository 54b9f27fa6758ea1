//! Order Lines

mod handlers;

pub(crate) use handlers::*;
