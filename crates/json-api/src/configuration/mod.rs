//! Kitchen Configuration

mod errors;
mod handlers;

pub(crate) use handlers::*;
