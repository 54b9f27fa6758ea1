//! Dishes

pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub(crate) mod resolver;
pub mod service;

pub use errors::DishesServiceError;
pub use service::*;
