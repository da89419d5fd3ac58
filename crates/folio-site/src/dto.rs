//! Data transfer objects for the site API.

use folio_bench::aggregate::{RegimeSummary, Spread, SummaryCards, WinTally};
use folio_bench::{BenchmarkRecord, CircuitFamily, Metadata, Regime};
use folio_topology::{ColorScale, Coupling, QubitNode, Theme, Topology};
use folio_view::{ErrorAccumulation, PathChoice};
use serde::{Deserialize, Serialize};

// ============================================================================
// Health
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status (always "ok" if responding).
    pub status: String,
    /// Site version.
    pub version: String,
    /// Benchmark records loaded across all collections.
    pub records: usize,
    /// Qubits on the diagrammed device.
    pub qubits: usize,
}

// ============================================================================
// Pages
// ============================================================================

/// Query parameters accepted by the HTML pages.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// `dark` or `light`; the configured default otherwise.
    pub theme: Option<Theme>,
    /// Comma-separated qubits preselected in the topology diagram.
    pub selected: Option<String>,
    /// Path highlighted in the cost comparison.
    pub path: Option<PathChoice>,
    /// Show the SWAP decomposition expanded.
    #[serde(default)]
    pub expanded: bool,
    /// Element shown in the topology info panel: a qubit (`4`) or a coupling (`5-9`).
    pub hover: Option<String>,
    /// Calculator gate count; clamped to the slider range.
    pub gates: Option<u32>,
    /// Calculator per-gate fidelity; clamped to the slider range.
    pub fidelity: Option<f64>,
    /// Jump the shared animation to this step and pause it.
    pub step: Option<usize>,
    /// Start (`true`) or pause (`false`) the shared animation.
    pub playing: Option<bool>,
}

// ============================================================================
// Topology
// ============================================================================

/// A qubit with its display color.
#[derive(Debug, Serialize)]
pub struct NodeInfo {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub quality: f64,
    /// CSS color on the topology scale.
    pub color: String,
}

impl NodeInfo {
    fn from_node(node: &QubitNode, scale: &ColorScale) -> Self {
        Self {
            id: node.id,
            x: node.x,
            y: node.y,
            quality: node.quality,
            color: scale.color(node.quality).css(),
        }
    }
}

/// A coupling with its display color.
#[derive(Debug, Serialize)]
pub struct EdgeInfo {
    pub from: u32,
    pub to: u32,
    pub quality: f64,
    /// CSS color on the topology scale.
    pub color: String,
}

impl EdgeInfo {
    fn from_coupling(edge: &Coupling, scale: &ColorScale) -> Self {
        Self {
            from: edge.from,
            to: edge.to,
            quality: edge.quality,
            color: scale.color(edge.quality).css(),
        }
    }
}

/// Full device description.
#[derive(Debug, Serialize)]
pub struct TopologyResponse {
    pub name: String,
    pub nodes: Vec<NodeInfo>,
    pub edges: Vec<EdgeInfo>,
}

impl TopologyResponse {
    pub fn from_topology(topology: &Topology, scale: &ColorScale) -> Self {
        Self {
            name: topology.name().to_string(),
            nodes: topology
                .nodes()
                .iter()
                .map(|n| NodeInfo::from_node(n, scale))
                .collect(),
            edges: topology
                .edges()
                .iter()
                .map(|e| EdgeInfo::from_coupling(e, scale))
                .collect(),
        }
    }
}

/// `GET /api/topology/path` parameters.
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub from: u32,
    pub to: u32,
}

/// Shortest route between two qubits.
#[derive(Debug, Serialize, Deserialize)]
pub struct PathResponse {
    pub from: u32,
    pub to: u32,
    /// Hop path, endpoints included.
    pub path: Vec<u32>,
    pub hops: usize,
    /// SWAPs needed to make the endpoints adjacent.
    pub swaps: usize,
    pub adjacent: bool,
    /// Intermediate qubits.
    pub via: Vec<u32>,
}

/// `GET /api/topology/svg` parameters.
#[derive(Debug, Default, Deserialize)]
pub struct SvgQuery {
    /// Comma-separated selected qubits, e.g. `0,5`.
    pub selected: Option<String>,
    pub theme: Option<Theme>,
    /// Element under the pointer: a qubit (`4`) or a coupling (`5-9`).
    pub hover: Option<String>,
}

// ============================================================================
// Benchmarks
// ============================================================================

/// Dataset overview.
#[derive(Debug, Serialize)]
pub struct BenchmarksResponse {
    pub metadata: Metadata,
    /// Collection names in the dataset, sorted.
    pub collections: Vec<String>,
    /// Regime the summary cards are computed over.
    pub display_regime: Regime,
    pub threshold: f64,
    pub cards: SummaryCards,
    pub regimes: Vec<RegimeSummary>,
}

/// One record with derived values.
#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub record: BenchmarkRecord,
    pub family: Option<CircuitFamily>,
    /// Subject minus baseline per run, in percentage points.
    pub run_gains: Vec<f64>,
    /// Mean and population std of `run_gains`.
    pub run_gain_spread: Option<Spread>,
}

/// `GET /api/benchmarks/win-rate` parameters.
#[derive(Debug, Default, Deserialize)]
pub struct WinRateQuery {
    /// Gain threshold in percentage points; the configured one otherwise.
    pub threshold: Option<f64>,
    /// Restrict to one regime; every record otherwise.
    pub regime: Option<String>,
}

/// Win tally at a threshold.
#[derive(Debug, Serialize)]
pub struct WinRateResponse {
    pub regime: Option<Regime>,
    #[serde(flatten)]
    pub tally: WinTally,
}

// ============================================================================
// Animation
// ============================================================================

/// Snapshot of the live error-accumulation animation.
#[derive(Debug, Serialize)]
pub struct AnimationResponse {
    pub step: usize,
    pub label: String,
    pub fidelity: f64,
    /// Readout such as `94%`.
    pub readout: String,
    pub bad: bool,
    pub playing: bool,
}

impl AnimationResponse {
    pub fn from_state(animation: &ErrorAccumulation) -> Self {
        let step = animation.current();
        Self {
            step: animation.step(),
            label: step.label.to_string(),
            fidelity: step.fidelity,
            readout: animation.readout(),
            bad: animation.is_bad(),
            playing: animation.is_playing(),
        }
    }
}
