//! CLI command implementations.

pub mod bench;
pub mod export;
pub mod route;
pub mod serve;
pub mod topology;
pub mod version;
