//! Application state for the site server.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use folio_bench::aggregate::DEFAULT_WIN_THRESHOLD;
use folio_bench::{BenchResult, BenchmarkRecord, Dataset, Regime};
use folio_topology::{Palette, Theme, Topology};
use folio_view::animation::DEFAULT_INTERVAL;
use folio_view::selection::DEFAULT_CAPACITY;
use folio_view::{ErrorAccumulation, Ticker};
use rustc_hash::FxHashMap;
use tokio::sync::Mutex;
use tracing::info;

use crate::content::{self, Post};

/// Regime whose records feed the charts and summary cards.
pub const DISPLAY_REGIME: Regime = Regime::Good;

/// Site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,
    /// Benchmark dataset file; the embedded dataset when `None`.
    pub data_path: Option<PathBuf>,
    /// Theme used when a request does not ask for one.
    pub default_theme: Theme,
    /// Maximum number of selected qubits in the topology diagram.
    pub selection_capacity: usize,
    /// Gain (percentage points) a circuit must exceed to count as a win.
    pub win_threshold: f64,
    /// Time between error-accumulation animation steps.
    pub animation_interval: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_address: ([127, 0, 0, 1], 3000).into(),
            data_path: None,
            default_theme: Theme::Dark,
            selection_capacity: DEFAULT_CAPACITY,
            win_threshold: DEFAULT_WIN_THRESHOLD,
            animation_interval: DEFAULT_INTERVAL,
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// Site configuration.
    pub config: SiteConfig,
    /// Validated benchmark dataset.
    pub dataset: Dataset,
    /// Device shown in the topology diagram and queried by the API.
    pub topology: Topology,
    /// Live animation state advanced by [`AppState::start_animation`].
    pub animation: Arc<Mutex<ErrorAccumulation>>,
    posts: FxHashMap<&'static str, &'static Post>,
}

impl AppState {
    /// Load the configured dataset and build the state.
    pub fn load(config: SiteConfig) -> BenchResult<Self> {
        let dataset = match &config.data_path {
            Some(path) => Dataset::from_path(path)?,
            None => Dataset::embedded()?,
        };
        Ok(Self::with_dataset(config, dataset))
    }

    /// Build the state around an already loaded dataset.
    pub fn with_dataset(config: SiteConfig, dataset: Dataset) -> Self {
        let posts = content::POSTS.iter().map(|p| (p.slug, p)).collect();
        Self {
            config,
            dataset,
            topology: Topology::sample(),
            animation: Arc::new(Mutex::new(ErrorAccumulation::default())),
            posts,
        }
    }

    /// Spawn the animation timer. The animation stops when the handle drops.
    pub fn start_animation(&self) -> Ticker {
        info!(
            interval_ms = self.config.animation_interval.as_millis() as u64,
            "starting error-accumulation animation"
        );
        Ticker::spawn(self.animation.clone(), self.config.animation_interval)
    }

    /// Look up a blog post by slug.
    pub fn post(&self, slug: &str) -> Option<&'static Post> {
        self.posts.get(slug).copied()
    }

    /// Records shown in the charts.
    pub fn display_records(&self) -> &[BenchmarkRecord] {
        self.dataset.records(DISPLAY_REGIME)
    }

    /// Palette for an optional requested theme.
    pub fn palette(&self, requested: Option<Theme>) -> Palette {
        requested.unwrap_or(self.config.default_theme).palette()
    }
}
