//! Loading and validating the static benchmark dataset.
//!
//! The JSON document has a `metadata` object plus one or more named
//! collections, each mapping a regime to its records:
//!
//! ```json
//! {
//!   "metadata": { "preset": "standard", ... },
//!   "benchmarks": { "noisy": [...], "good": [...], "excellent": [...] },
//!   "size_sweep": { "good": [...] }
//! }
//! ```
//!
//! Loading is all-or-nothing: any malformed record fails the whole load.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::aggregate::gain_from_runs;
use crate::error::{BenchError, BenchResult};
use crate::record::{BenchmarkRecord, Metadata, Regime};

/// Name of the collection holding the main comparison.
pub const PRIMARY_COLLECTION: &str = "benchmarks";

/// Tolerance for cross-checking stored aggregates against the raw runs.
pub const CONSISTENCY_TOLERANCE: f64 = 1e-6;

/// The dataset shipped with the site, embedded at build time.
pub const EMBEDDED_JSON: &str = include_str!("../../../data/benchmarks.json");

/// Records of one collection, keyed by regime.
pub type RegimeTable = BTreeMap<Regime, Vec<BenchmarkRecord>>;

/// A validated benchmark dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    metadata: Metadata,
    #[serde(flatten)]
    collections: BTreeMap<String, RegimeTable>,
}

impl Dataset {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> BenchResult<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        dataset.validate()?;
        info!(
            preset = %dataset.metadata.preset,
            collections = dataset.collections.len(),
            records = dataset.all_records().count(),
            "loaded benchmark dataset"
        );
        Ok(dataset)
    }

    /// Read, parse and validate a dataset file.
    pub fn from_path(path: &Path) -> BenchResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| BenchError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// The dataset embedded in the binary.
    pub fn embedded() -> BenchResult<Self> {
        Self::from_json(EMBEDDED_JSON)
    }

    /// Check every record against the dataset invariants.
    pub fn validate(&self) -> BenchResult<()> {
        if !self.collections.contains_key(PRIMARY_COLLECTION) {
            return Err(BenchError::invalid(
                PRIMARY_COLLECTION,
                "missing primary collection",
            ));
        }
        for (name, table) in &self.collections {
            for (regime, records) in table {
                for record in records {
                    validate_record(record, *regime)?;
                }
                debug!(collection = %name, %regime, records = records.len(), "validated");
            }
        }
        Ok(())
    }

    /// Dataset metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Collection names.
    pub fn collection_names(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    /// A named collection.
    pub fn collection(&self, name: &str) -> Option<&RegimeTable> {
        self.collections.get(name)
    }

    /// Records of the primary collection for one regime.
    pub fn records(&self, regime: Regime) -> &[BenchmarkRecord] {
        self.collections
            .get(PRIMARY_COLLECTION)
            .and_then(|table| table.get(&regime))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every record of every collection.
    pub fn all_records(&self) -> impl Iterator<Item = &BenchmarkRecord> {
        self.collections
            .values()
            .flat_map(|table| table.values().flatten())
    }

    /// Look up a record by exact regime and circuit name.
    ///
    /// The primary collection is searched first, then the others.
    pub fn select(&self, regime: Regime, circuit: &str) -> Option<&BenchmarkRecord> {
        let primary = self.collections.get(PRIMARY_COLLECTION);
        primary
            .into_iter()
            .chain(
                self.collections
                    .iter()
                    .filter(|(name, _)| name.as_str() != PRIMARY_COLLECTION)
                    .map(|(_, table)| table),
            )
            .filter_map(|table| table.get(&regime))
            .flatten()
            .find(|r| r.circuit == circuit)
    }
}

fn validate_record(record: &BenchmarkRecord, regime: Regime) -> BenchResult<()> {
    let name = record.circuit.as_str();

    if record.regime != regime {
        return Err(BenchError::invalid(
            name,
            format!("regime '{}' listed under '{}'", record.regime, regime),
        ));
    }
    if record.runs.is_empty() {
        return Err(BenchError::invalid(name, "no runs"));
    }
    if record.runs.len() != record.num_runs as usize {
        return Err(BenchError::invalid(
            name,
            format!(
                "num_runs is {} but {} runs are listed",
                record.num_runs,
                record.runs.len()
            ),
        ));
    }
    for run in &record.runs {
        for value in [run.subject, run.baseline] {
            if !(0.0..=1.0).contains(&value) {
                return Err(BenchError::invalid(
                    name,
                    format!("fidelity {value} out of range in run {}", run.seed),
                ));
            }
        }
    }

    let computed = gain_from_runs(record).unwrap_or_default();
    if (computed - record.fidelity_gain_pct).abs() > CONSISTENCY_TOLERANCE {
        return Err(BenchError::invalid(
            name,
            format!(
                "fidelity_gain_pct {} does not match runs ({computed})",
                record.fidelity_gain_pct
            ),
        ));
    }

    let n = record.runs.len() as f64;
    let subject_mean = record.runs.iter().map(|r| r.subject).sum::<f64>() / n;
    let baseline_mean = record.runs.iter().map(|r| r.baseline).sum::<f64>() / n;
    if (subject_mean - record.subject.fidelity.mean).abs() > CONSISTENCY_TOLERANCE
        || (baseline_mean - record.baseline.fidelity.mean).abs() > CONSISTENCY_TOLERANCE
    {
        return Err(BenchError::invalid(
            name,
            "fidelity means do not match runs",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "metadata": {
            "preset": "quick",
            "runs_per_circuit": 2,
            "device_qubits": 12,
            "topology": "grid_3x4",
            "timestamp": "2026-01-28T14:32:10Z"
        },
        "benchmarks": {
            "good": [{
                "circuit": "GHZ-5",
                "num_qubits": 5,
                "depth": 6,
                "regime": "good",
                "num_runs": 2,
                "nacre": {
                    "fidelity": {"min": 0.78, "max": 0.8, "mean": 0.79, "median": 0.79, "std": 0.01},
                    "swaps": {"min": 0, "max": 0, "mean": 0, "median": 0, "std": 0}
                },
                "sabre": {
                    "fidelity": {"min": 0.7, "max": 0.72, "mean": 0.71, "median": 0.71, "std": 0.01},
                    "swaps": {"min": 0, "max": 0, "mean": 0, "median": 0, "std": 0}
                },
                "fidelity_gain_pct": 8.0,
                "runs": [{"nacre": 0.80, "sabre": 0.70}, {"nacre": 0.78, "sabre": 0.72}]
            }]
        }
    }"#;

    #[test]
    fn test_minimal_dataset_loads() {
        let ds = Dataset::from_json(MINIMAL).unwrap();
        assert_eq!(ds.metadata().device_qubits, 12);
        assert_eq!(ds.records(Regime::Good).len(), 1);
        assert!(ds.records(Regime::Noisy).is_empty());
        assert!(ds.select(Regime::Good, "GHZ-5").is_some());
        assert!(ds.select(Regime::Noisy, "GHZ-5").is_none());
        assert!(ds.select(Regime::Good, "ghz-5").is_none());
    }

    #[test]
    fn test_inconsistent_gain_rejected() {
        let bad = MINIMAL.replace("\"fidelity_gain_pct\": 8.0", "\"fidelity_gain_pct\": 9.0");
        let err = Dataset::from_json(&bad).unwrap_err();
        assert!(matches!(err, BenchError::Validation { .. }));
        assert!(err.to_string().contains("GHZ-5"));
    }

    #[test]
    fn test_regime_mismatch_rejected() {
        let bad = MINIMAL.replace("\"regime\": \"good\"", "\"regime\": \"noisy\"");
        assert!(matches!(
            Dataset::from_json(&bad),
            Err(BenchError::Validation { .. })
        ));
    }

    #[test]
    fn test_run_count_mismatch_rejected() {
        let bad = MINIMAL.replace("\"num_runs\": 2", "\"num_runs\": 3");
        assert!(Dataset::from_json(&bad).is_err());
    }

    #[test]
    fn test_missing_field_is_fatal() {
        let bad = MINIMAL.replace("\"depth\": 6,", "");
        assert!(matches!(Dataset::from_json(&bad), Err(BenchError::Json(_))));
    }

    #[test]
    fn test_missing_primary_collection() {
        let bad = MINIMAL.replace("\"benchmarks\"", "\"extras\"");
        assert!(Dataset::from_json(&bad).is_err());
    }

    #[test]
    fn test_from_path_reports_io() {
        let err = Dataset::from_path(Path::new("/nonexistent/benchmarks.json")).unwrap_err();
        assert!(matches!(err, BenchError::Io(_)));
    }
}
