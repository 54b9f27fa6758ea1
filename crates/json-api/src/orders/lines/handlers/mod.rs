//! Order Line Handlers
//!
//! Line changes answer with the whole repriced order.

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod update;
