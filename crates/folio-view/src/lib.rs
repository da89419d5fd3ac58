//! Interactive diagrams for the routing blog post.
//!
//! Every diagram is a small state struct plus a renderer producing inline
//! SVG for a resolved [`Palette`](folio_topology::Palette):
//!
//! - [`TopologyView`]: selectable device graph with hover tooltips and
//!   connectivity/SWAP feedback
//! - [`SwapDiagram`]: SWAP = 3 × CNOT decomposition
//! - [`ErrorAccumulation`] and [`Ticker`]: the auto-advancing fidelity decay
//! - [`CostComparison`]: short path vs. high-quality path
//! - [`FidelityCalculator`]: compounding gate fidelity
//! - [`placement`]: random vs. noise-aware initial placement
//! - [`BenchmarkCharts`]: benchmark bar charts, results table and summary cards
//!
//! # Example
//!
//! ```
//! use folio_topology::Theme;
//! use folio_view::{Connectivity, TopologyView};
//!
//! let mut view = TopologyView::sample(2);
//! view.click(0).unwrap();
//! view.click(1).unwrap();
//! assert_eq!(view.connectivity(), Connectivity::Connected);
//!
//! let svg = view.render_svg(Theme::Dark.palette());
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod animation;
pub mod calculator;
pub mod charts;
pub mod cost;
pub mod error;
pub mod hover;
pub mod placement;
pub mod selection;
pub mod svg;
pub mod swap;
pub mod topology_view;

pub use animation::{ErrorAccumulation, STEPS, Step, Ticker};
pub use calculator::{FidelityCalculator, Readout};
pub use charts::BenchmarkCharts;
pub use cost::{CostComparison, PathChoice, PathSummary};
pub use error::{ViewError, ViewResult};
pub use hover::{Hover, HoverTarget};
pub use placement::{CircuitDiagram, Placement};
pub use selection::{Selection, SelectionState, Toggle};
pub use swap::SwapDiagram;
pub use topology_view::{Connectivity, DiagramLinks, Tooltip, TopologyView};
