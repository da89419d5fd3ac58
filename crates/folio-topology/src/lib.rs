//! Device topology and quality scales for the folio site.
//!
//! This crate holds the small amount of real logic behind the interactive
//! routing diagrams:
//!
//! - [`Topology`]: a fixed, undirected qubit coupling graph with adjacency
//!   and breadth-first shortest-path queries
//! - [`ColorScale`]: maps a quality value onto a display [`Color`]
//! - [`Theme`] / [`Palette`]: light and dark color sets resolved once per render
//!
//! # Example
//!
//! ```
//! use folio_topology::Topology;
//!
//! let device = Topology::sample();
//! assert!(device.are_adjacent(0, 1));
//! assert_eq!(device.swap_count(0, 1).unwrap(), Some(0));
//!
//! let path = device.shortest_path(0, 10).unwrap();
//! assert_eq!(path.first(), Some(&0));
//! assert_eq!(path.last(), Some(&10));
//! ```

pub mod color;
pub mod device;
pub mod error;
pub mod fidelity;
pub mod theme;

pub use color::{Color, ColorScale, ColorStrategy, named};
pub use device::{Coupling, QubitNode, SwapRoute, Topology};
pub use error::{TopologyError, TopologyResult};
pub use theme::{Palette, Theme};
