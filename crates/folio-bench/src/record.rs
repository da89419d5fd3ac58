//! Benchmark record schema.
//!
//! Mirrors the JSON emitted by the routing benchmark harness. The subject
//! router is serialized under `nacre`, the baseline under `sabre`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BenchError;

/// Simulated hardware quality bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    /// Low two-qubit fidelities.
    Noisy,
    /// Typical current hardware.
    Good,
    /// Near-threshold hardware.
    Excellent,
}

impl Regime {
    /// All regimes, noisiest first.
    pub const ALL: [Regime; 3] = [Regime::Noisy, Regime::Good, Regime::Excellent];

    /// Lowercase name as used in the dataset.
    pub fn as_str(self) -> &'static str {
        match self {
            Regime::Noisy => "noisy",
            Regime::Good => "good",
            Regime::Excellent => "excellent",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Regime {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "noisy" => Ok(Regime::Noisy),
            "good" => Ok(Regime::Good),
            "excellent" => Ok(Regime::Excellent),
            _ => Err(BenchError::UnknownRegime(s.to_string())),
        }
    }
}

/// Dataset-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Benchmark preset name.
    pub preset: String,
    /// Seeds run per circuit.
    pub runs_per_circuit: u32,
    /// Qubits on the simulated device.
    pub device_qubits: u32,
    /// Device topology name.
    pub topology: String,
    /// When the benchmark was run.
    pub timestamp: DateTime<Utc>,
}

/// Summary statistics over one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation.
    pub std: f64,
}

/// Per-router statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouterStats {
    /// Achieved circuit fidelity.
    pub fidelity: Stats,
    /// Inserted SWAP count.
    pub swaps: Stats,
}

/// One seeded run of both routers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSample {
    /// Seed of this run.
    #[serde(default)]
    pub seed: u64,
    /// Subject router fidelity.
    #[serde(rename = "nacre")]
    pub subject: f64,
    /// Baseline router fidelity.
    #[serde(rename = "sabre")]
    pub baseline: f64,
    /// Subject router SWAP count.
    #[serde(rename = "nacre_swaps", default, skip_serializing_if = "Option::is_none")]
    pub subject_swaps: Option<u32>,
    /// Baseline router SWAP count.
    #[serde(rename = "sabre_swaps", default, skip_serializing_if = "Option::is_none")]
    pub baseline_swaps: Option<u32>,
}

/// Measurements for one circuit in one regime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Circuit name, e.g. `GHZ-5`.
    pub circuit: String,
    pub num_qubits: u32,
    /// Gate depth of the input circuit.
    pub depth: u32,
    pub regime: Regime,
    pub num_runs: u32,
    /// Subject router statistics.
    #[serde(rename = "nacre")]
    pub subject: RouterStats,
    /// Baseline router statistics.
    #[serde(rename = "sabre")]
    pub baseline: RouterStats,
    /// Mean fidelity gain in percentage points.
    pub fidelity_gain_pct: f64,
    /// Individual seeded runs.
    pub runs: Vec<RunSample>,
}

impl BenchmarkRecord {
    /// Circuit family: the part of the name before the first `-`.
    pub fn family(&self) -> &str {
        self.circuit
            .split_once('-')
            .map_or(self.circuit.as_str(), |(family, _)| family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regime_parse() {
        assert_eq!("noisy".parse::<Regime>().unwrap(), Regime::Noisy);
        assert_eq!("Excellent".parse::<Regime>().unwrap(), Regime::Excellent);
        assert!(matches!(
            "perfect".parse::<Regime>(),
            Err(BenchError::UnknownRegime(_))
        ));
    }

    #[test]
    fn test_run_sample_minimal_shape() {
        let run: RunSample = serde_json::from_str(r#"{"nacre": 0.8, "sabre": 0.7}"#).unwrap();
        assert_eq!(run.seed, 0);
        assert_eq!(run.subject, 0.8);
        assert_eq!(run.baseline, 0.7);
        assert_eq!(run.subject_swaps, None);
    }

    #[test]
    fn test_missing_field_is_error() {
        let res: Result<RunSample, _> = serde_json::from_str(r#"{"nacre": 0.8}"#);
        assert!(res.is_err());
    }
}
