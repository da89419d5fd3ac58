//! Folio site - web server for the portfolio and the routing blog post.
//!
//! Pages are rendered server-side with the folio-view diagrams inlined as
//! SVG. A small JSON API exposes the device topology, route queries and the
//! benchmark dataset.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use folio_site::{AppState, SiteConfig, create_router};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = SiteConfig::default();
//!     let state = Arc::new(AppState::load(config.clone())?);
//!     let _ticker = state.start_animation();
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod code_block;
pub mod content;
pub mod dto;
pub mod error;
pub mod links;
pub mod render;
pub mod server;
pub mod state;

pub use dto::{
    AnimationResponse, BenchmarksResponse, HealthResponse, PathResponse, RecordResponse,
    TopologyResponse, WinRateResponse,
};
pub use error::ApiError;
pub use render::Figures;
pub use server::{create_router, serve};
pub use state::{AppState, SiteConfig};
