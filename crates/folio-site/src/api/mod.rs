//! API endpoint handlers.

pub mod animation;
pub mod benchmarks;
pub mod health;
pub mod topology;
