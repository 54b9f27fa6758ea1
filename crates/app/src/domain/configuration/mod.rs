//! Configuration
//!
//! The kitchen policy is a single database row: delivery time, the daily
//! cutoff for changes, and the subvention granted to the first order of a day.

pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::ConfigurationServiceError;
pub use service::*;
