//! Orders

mod errors;
mod handlers;
pub(crate) mod lines;

pub(crate) use handlers::*;
