//! Routing benchmark dataset for the folio site.
//!
//! Loads the static benchmark JSON (subject router vs. baseline router,
//! grouped by fidelity regime), validates it once, and derives display rows
//! and summary statistics from it.
//!
//! # Example
//!
//! ```
//! use folio_bench::{Dataset, Regime, aggregate};
//!
//! let dataset = Dataset::embedded().unwrap();
//! let good = dataset.records(Regime::Good);
//! let rate = aggregate::win_rate(good, aggregate::DEFAULT_WIN_THRESHOLD);
//! assert!(rate > 0.5);
//!
//! let ghz = dataset.select(Regime::Good, "GHZ-5").unwrap();
//! let gains = aggregate::per_run_gain(ghz);
//! assert_eq!(gains.len(), ghz.runs.len());
//! ```

pub mod aggregate;
pub mod dataset;
pub mod error;
pub mod family;
pub mod record;

pub use aggregate::{
    ChartRow, RegimeSummary, ResultRow, Spread, SummaryCards, WinTally, mean_and_std,
    per_run_gain, win_rate,
};
pub use dataset::Dataset;
pub use error::{BenchError, BenchResult};
pub use family::CircuitFamily;
pub use record::{BenchmarkRecord, Metadata, Regime, RouterStats, RunSample, Stats};
