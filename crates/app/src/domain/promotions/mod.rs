//! Promotions
//!
//! Time-boxed cost overrides for a single dish. Windows of the same dish never
//! overlap, so at most one promotion applies at any instant.

pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::PromotionsServiceError;
pub use service::*;
