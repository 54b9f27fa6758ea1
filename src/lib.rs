//! Lunchline
//!
//! Pricing, kitchen schedule and promotion arithmetic for the Lunchline meal
//! ordering service. Nothing in this crate performs I/O.

pub mod pricing;
pub mod schedule;
pub mod windows;
