//! Lunchline Domain Concerns

pub mod carts;
pub mod configuration;
pub mod dishes;
pub mod orders;
pub mod promotions;
pub mod users;
