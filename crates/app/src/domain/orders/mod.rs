//! Orders
//!
//! An order is placed from the user's cart and freezes each dish's name and
//! cost at that moment. Lines can be added, removed or re-quantified until the
//! kitchen's daily cutoff; totals are recomputed inside the same transaction.

pub mod data;
pub mod errors;
pub mod records;
mod repositories;
pub mod service;

pub use errors::OrdersServiceError;
pub use service::*;
