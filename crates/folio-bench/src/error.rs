//! Benchmark dataset error types.

use thiserror::Error;

/// Result type for benchmark operations.
pub type BenchResult<T> = Result<T, BenchError>;

/// Errors raised while loading the benchmark dataset.
///
/// The dataset is static build-time content, so every variant is fatal for
/// the load that produced it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BenchError {
    /// The dataset file could not be read.
    #[error("I/O error: {0}")]
    Io(String),

    /// The document is not valid JSON or misses a required field.
    #[error("Malformed benchmark data: {0}")]
    Json(#[from] serde_json::Error),

    /// A record violates a dataset invariant.
    #[error("Invalid record '{circuit}': {reason}")]
    Validation {
        /// Circuit name of the offending record.
        circuit: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Unknown regime name.
    #[error("Unknown fidelity regime '{0}'. Supported regimes: noisy, good, excellent")]
    UnknownRegime(String),
}

impl BenchError {
    pub(crate) fn invalid(circuit: &str, reason: impl Into<String>) -> Self {
        BenchError::Validation {
            circuit: circuit.to_string(),
            reason: reason.into(),
        }
    }
}
