//! Device topology: qubit nodes, weighted couplings and connectivity queries.
//!
//! The topology is an undirected graph. Every node and coupling carries a
//! quality scalar in `(0, 1]`, but path queries count hops only: the quality
//! is display data, not a distance.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TopologyError, TopologyResult};

/// A physical qubit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QubitNode {
    /// Qubit index.
    pub id: u32,
    /// Layout x coordinate (display only).
    pub x: f64,
    /// Layout y coordinate (display only).
    pub y: f64,
    /// Readout/single-qubit quality score.
    pub quality: f64,
}

/// An undirected two-qubit coupling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coupling {
    /// First endpoint.
    pub from: u32,
    /// Second endpoint.
    pub to: u32,
    /// Two-qubit gate fidelity.
    pub quality: f64,
}

impl Coupling {
    /// Whether this coupling joins `a` and `b`, in either order.
    #[inline]
    pub fn joins(&self, a: u32, b: u32) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// The endpoint opposite `node`, if `node` is an endpoint.
    pub fn other(&self, node: u32) -> Option<u32> {
        if self.from == node {
            Some(self.to)
        } else if self.to == node {
            Some(self.from)
        } else {
            None
        }
    }
}

/// Route between two qubits expressed as SWAPs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapRoute {
    /// Full hop path, endpoints included.
    pub path: Vec<u32>,
    /// Number of SWAPs needed to make the endpoints adjacent.
    pub swaps: usize,
    /// Intermediate qubits the state travels through.
    pub via: Vec<u32>,
}

/// Node and edge tables with an adjacency index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topology {
    /// Human-readable name.
    name: String,
    /// Node table, in insertion order.
    nodes: Vec<QubitNode>,
    /// Edge table, in insertion order.
    edges: Vec<Coupling>,
    /// Adjacency list for fast lookup.
    #[serde(skip)]
    adjacency: FxHashMap<u32, Vec<u32>>,
}

impl Topology {
    /// Create a topology from a node table.
    ///
    /// Fails on duplicate node identifiers.
    pub fn new(name: impl Into<String>, nodes: Vec<QubitNode>) -> TopologyResult<Self> {
        let mut seen = FxHashSet::default();
        for node in &nodes {
            if !seen.insert(node.id) {
                return Err(TopologyError::DuplicateNode(node.id));
            }
        }
        Ok(Self {
            name: name.into(),
            nodes,
            edges: Vec::new(),
            adjacency: FxHashMap::default(),
        })
    }

    /// Add an undirected coupling.
    ///
    /// Both endpoints must exist. Duplicate couplings (including reversed
    /// pairs) are ignored.
    pub fn add_edge(&mut self, from: u32, to: u32, quality: f64) -> TopologyResult<()> {
        if !self.contains(from) || !self.contains(to) {
            return Err(TopologyError::InvalidEdge { from, to });
        }
        if self.edges.iter().any(|e| e.joins(from, to)) {
            return Ok(());
        }
        self.push_edge(Coupling { from, to, quality });
        Ok(())
    }

    fn push_edge(&mut self, edge: Coupling) {
        self.adjacency.entry(edge.from).or_default().push(edge.to);
        self.adjacency.entry(edge.to).or_default().push(edge.from);
        self.edges.push(edge);
    }

    /// Rebuild the adjacency index from the edge table.
    ///
    /// Must be called after deserialization.
    pub fn rebuild_caches(&mut self) {
        self.adjacency.clear();
        for edge in &self.edges {
            self.adjacency.entry(edge.from).or_default().push(edge.to);
            self.adjacency.entry(edge.to).or_default().push(edge.from);
        }
    }

    /// Topology name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Node table.
    pub fn nodes(&self) -> &[QubitNode] {
        &self.nodes
    }

    /// Edge table.
    pub fn edges(&self) -> &[Coupling] {
        &self.edges
    }

    /// Number of qubits.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.nodes.len()
    }

    /// Whether `id` is a node of this topology.
    pub fn contains(&self, id: u32) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Look up a node.
    pub fn node(&self, id: u32) -> Option<&QubitNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Look up the coupling joining `a` and `b`.
    pub fn edge(&self, a: u32, b: u32) -> Option<&Coupling> {
        self.edges.iter().find(|e| e.joins(a, b))
    }

    /// Neighbors of a qubit.
    pub fn neighbors(&self, id: u32) -> impl Iterator<Item = u32> + '_ {
        self.adjacency
            .get(&id)
            .map(|v| v.iter().copied())
            .into_iter()
            .flatten()
    }

    /// Check if two qubits are directly coupled.
    ///
    /// A node is never adjacent to itself unless a self-loop exists.
    #[inline]
    pub fn are_adjacent(&self, a: u32, b: u32) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|neighbors| neighbors.contains(&b))
    }

    fn require(&self, id: u32) -> TopologyResult<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(TopologyError::UnknownNode { node: id })
        }
    }

    /// Minimum-hop path from `start` to `end`, both included.
    ///
    /// Breadth-first search over unweighted couplings. Any shortest path may
    /// be returned when several exist.
    pub fn shortest_path(&self, start: u32, end: u32) -> TopologyResult<Vec<u32>> {
        self.require(start)?;
        self.require(end)?;

        if start == end {
            return Ok(vec![start]);
        }

        let mut visited: FxHashMap<u32, Option<u32>> = FxHashMap::default();
        let mut queue = VecDeque::new();

        visited.insert(start, None);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.neighbors(current) {
                if visited.contains_key(&neighbor) {
                    continue;
                }

                visited.insert(neighbor, Some(current));

                if neighbor == end {
                    let mut path = vec![end];
                    let mut node = end;
                    while let Some(Some(prev)) = visited.get(&node) {
                        path.push(*prev);
                        node = *prev;
                    }
                    path.reverse();
                    debug!(start, end, hops = path.len() - 1, "shortest path found");
                    return Ok(path);
                }

                queue.push_back(neighbor);
            }
        }

        Err(TopologyError::NoPath {
            from: start,
            to: end,
        })
    }

    /// Hop distance between two qubits, `None` when unreachable.
    pub fn distance(&self, a: u32, b: u32) -> TopologyResult<Option<usize>> {
        match self.shortest_path(a, b) {
            Ok(path) => Ok(Some(path.len() - 1)),
            Err(TopologyError::NoPath { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// SWAPs needed before `a` and `b` can interact: intermediate hops on a
    /// shortest path. `None` when unreachable.
    pub fn swap_count(&self, a: u32, b: u32) -> TopologyResult<Option<usize>> {
        Ok(self.distance(a, b)?.map(|hops| hops.saturating_sub(1)))
    }

    /// Full SWAP route between two qubits, `None` when unreachable.
    pub fn swap_route(&self, a: u32, b: u32) -> TopologyResult<Option<SwapRoute>> {
        match self.shortest_path(a, b) {
            Ok(path) => {
                let via = if path.len() > 2 {
                    path[1..path.len() - 1].to_vec()
                } else {
                    Vec::new()
                };
                Ok(Some(SwapRoute {
                    swaps: via.len(),
                    via,
                    path,
                }))
            }
            Err(TopologyError::NoPath { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Whether a small set of qubits is coupled enough to interact directly.
    ///
    /// Counts couplings with both endpoints in the set; the set is considered
    /// connected when that count reaches `len - 1`. Sets of zero or one qubit
    /// are trivially connected.
    pub fn is_connected_set(&self, qubits: &[u32]) -> bool {
        if qubits.len() <= 1 {
            return true;
        }
        let internal = self
            .edges
            .iter()
            .filter(|e| qubits.contains(&e.from) && qubits.contains(&e.to))
            .count();
        internal >= qubits.len() - 1
    }

    /// Whether every node can reach every other node.
    pub fn is_connected(&self) -> bool {
        let Some(first) = self.nodes.first() else {
            return true;
        };
        let mut seen = FxHashSet::default();
        let mut queue = VecDeque::from([first.id]);
        seen.insert(first.id);
        while let Some(current) = queue.pop_front() {
            for neighbor in self.neighbors(current) {
                if seen.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        seen.len() == self.nodes.len()
    }

    /// Product of each hop's gate fidelity raised to the gates-per-hop count.
    pub fn path_fidelity(&self, path: &[u32], gates_per_hop: i32) -> TopologyResult<f64> {
        let mut fidelity = 1.0;
        for pair in path.windows(2) {
            let edge = self
                .edge(pair[0], pair[1])
                .ok_or(TopologyError::NoPath {
                    from: pair[0],
                    to: pair[1],
                })?;
            fidelity *= edge.quality.powi(gates_per_hop);
        }
        Ok(fidelity)
    }
}

/// `(id, x, y, quality)` rows of the 11-qubit sample device.
const SAMPLE_NODES: [(u32, f64, f64, f64); 11] = [
    (0, 50.0, 35.0, 0.95),
    (1, 120.0, 35.0, 0.92),
    (2, 190.0, 35.0, 0.98),
    (3, 260.0, 35.0, 0.91),
    (4, 85.0, 85.0, 0.88),
    (5, 155.0, 85.0, 0.96),
    (6, 225.0, 85.0, 0.94),
    (7, 50.0, 135.0, 0.97),
    (8, 120.0, 135.0, 0.93),
    (9, 190.0, 135.0, 0.99),
    (10, 260.0, 135.0, 0.90),
];

/// `(from, to, quality)` rows of the 11-qubit sample device.
const SAMPLE_EDGES: [(u32, u32, f64); 17] = [
    (0, 1, 0.97),
    (1, 2, 0.92),
    (2, 3, 0.95),
    (0, 4, 0.88),
    (1, 5, 0.94),
    (2, 6, 0.96),
    (4, 5, 0.91),
    (5, 6, 0.99),
    (4, 7, 0.93),
    (4, 8, 0.87),
    (5, 8, 0.95),
    (5, 9, 0.98),
    (6, 9, 0.94),
    (6, 10, 0.89),
    (7, 8, 0.96),
    (8, 9, 0.97),
    (9, 10, 0.92),
];

/// `(id, x, y)` rows of the 6-qubit path-cost example.
const COST_NODES: [(u32, f64, f64); 6] = [
    (0, 30.0, 60.0),
    (1, 85.0, 30.0),
    (2, 140.0, 60.0),
    (3, 85.0, 90.0),
    (4, 195.0, 30.0),
    (5, 250.0, 60.0),
];

const COST_EDGES: [(u32, u32, f64); 7] = [
    (0, 1, 0.97),
    (1, 2, 0.99),
    (0, 3, 0.88),
    (2, 3, 0.91),
    (2, 4, 0.98),
    (4, 5, 0.96),
    (3, 5, 0.85),
];

impl Topology {
    fn from_tables(name: &str, nodes: Vec<QubitNode>, edges: &[(u32, u32, f64)]) -> Self {
        let mut topology = Self {
            name: name.to_string(),
            nodes,
            edges: Vec::with_capacity(edges.len()),
            adjacency: FxHashMap::default(),
        };
        for &(from, to, quality) in edges {
            topology.push_edge(Coupling { from, to, quality });
        }
        topology
    }

    /// The 11-qubit, 17-coupling sample device shown in the interactive
    /// diagram.
    pub fn sample() -> Self {
        let nodes = SAMPLE_NODES
            .iter()
            .map(|&(id, x, y, quality)| QubitNode { id, x, y, quality })
            .collect();
        Self::from_tables("sample-11q", nodes, &SAMPLE_EDGES)
    }

    /// The 6-qubit graph used to compare a short path with a high-quality one.
    ///
    /// Node qualities are not part of this example and are set to `1.0`.
    pub fn cost_example() -> Self {
        let nodes = COST_NODES
            .iter()
            .map(|&(id, x, y)| QubitNode {
                id,
                x,
                y,
                quality: 1.0,
            })
            .collect();
        Self::from_tables("cost-6q", nodes, &COST_EDGES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(n: u32) -> Topology {
        let nodes = (0..n)
            .map(|id| QubitNode {
                id,
                x: f64::from(id),
                y: 0.0,
                quality: 0.9,
            })
            .collect();
        let mut t = Topology::new("linear", nodes).unwrap();
        for i in 0..n.saturating_sub(1) {
            t.add_edge(i, i + 1, 0.9).unwrap();
        }
        t
    }

    #[test]
    fn test_sample_shape() {
        let t = Topology::sample();
        assert_eq!(t.num_qubits(), 11);
        assert_eq!(t.edges().len(), 17);
        assert!(t.is_connected());
        for e in t.edges() {
            assert!(t.contains(e.from) && t.contains(e.to));
        }
    }

    #[test]
    fn test_adjacent_q0_q1() {
        let t = Topology::sample();
        assert!(t.are_adjacent(0, 1));
        assert!(t.are_adjacent(1, 0));
        assert_eq!(t.edge(1, 0).map(|e| e.quality), Some(0.97));
        assert_eq!(t.swap_count(0, 1).unwrap(), Some(0));
    }

    #[test]
    fn test_not_self_adjacent() {
        let t = Topology::sample();
        for n in t.nodes() {
            assert!(!t.are_adjacent(n.id, n.id));
        }
    }

    #[test]
    fn test_q0_to_q10() {
        let t = Topology::sample();
        assert!(!t.are_adjacent(0, 10));
        let path = t.shortest_path(0, 10).unwrap();
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&10));
        assert_eq!(path.len(), 5);
        for pair in path.windows(2) {
            assert!(t.are_adjacent(pair[0], pair[1]));
        }
        assert_eq!(t.swap_count(0, 10).unwrap(), Some(3));
    }

    #[test]
    fn test_same_node_path() {
        let t = Topology::sample();
        assert_eq!(t.shortest_path(4, 4).unwrap(), vec![4]);
        assert_eq!(t.swap_count(4, 4).unwrap(), Some(0));
    }

    #[test]
    fn test_unknown_node() {
        let t = Topology::sample();
        assert_eq!(
            t.shortest_path(0, 42),
            Err(TopologyError::UnknownNode { node: 42 })
        );
        assert!(t.swap_count(99, 0).is_err());
    }

    #[test]
    fn test_disconnected_has_no_path() {
        let nodes = (0..4)
            .map(|id| QubitNode {
                id,
                x: 0.0,
                y: 0.0,
                quality: 0.9,
            })
            .collect();
        let mut t = Topology::new("split", nodes).unwrap();
        t.add_edge(0, 1, 0.9).unwrap();
        t.add_edge(2, 3, 0.9).unwrap();
        assert!(!t.is_connected());
        assert_eq!(
            t.shortest_path(0, 3),
            Err(TopologyError::NoPath { from: 0, to: 3 })
        );
        assert_eq!(t.swap_count(0, 3).unwrap(), None);
        assert_eq!(t.swap_route(1, 2).unwrap(), None);
    }

    #[test]
    fn test_linear_path() {
        let t = linear(5);
        assert_eq!(t.shortest_path(0, 4).unwrap(), vec![0, 1, 2, 3, 4]);
        let route = t.swap_route(0, 4).unwrap().unwrap();
        assert_eq!(route.swaps, 3);
        assert_eq!(route.via, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_edge_validation() {
        let mut t = linear(3);
        assert_eq!(
            t.add_edge(0, 7, 0.9),
            Err(TopologyError::InvalidEdge { from: 0, to: 7 })
        );
        t.add_edge(1, 0, 0.5).unwrap();
        assert_eq!(t.edges().len(), 2);
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let node = QubitNode {
            id: 3,
            x: 0.0,
            y: 0.0,
            quality: 1.0,
        };
        assert_eq!(
            Topology::new("dup", vec![node, node]).err(),
            Some(TopologyError::DuplicateNode(3))
        );
    }

    #[test]
    fn test_connected_set() {
        let t = Topology::sample();
        assert!(t.is_connected_set(&[]));
        assert!(t.is_connected_set(&[3]));
        assert!(t.is_connected_set(&[0, 1]));
        assert!(!t.is_connected_set(&[0, 2]));
        assert!(t.is_connected_set(&[4, 5, 8]));
        assert!(!t.is_connected_set(&[0, 3, 10]));
    }

    #[test]
    fn test_cost_example_paths() {
        let t = Topology::cost_example();
        let short = t.path_fidelity(&[0, 3, 5], 3).unwrap();
        let quality = t.path_fidelity(&[0, 1, 2, 4, 5], 3).unwrap();
        assert!((short - 0.88f64.powi(3) * 0.85f64.powi(3)).abs() < 1e-12);
        assert!(quality > short);
        assert_eq!((short * 100.0).round(), 42.0);
        assert_eq!((quality * 100.0).round(), 74.0);
        assert!(t.path_fidelity(&[0, 5], 3).is_err());
    }

    #[test]
    fn test_rebuild_after_deserialize() {
        let t = Topology::sample();
        let json = serde_json::to_string(&t).unwrap();
        let mut back: Topology = serde_json::from_str(&json).unwrap();
        assert!(!back.are_adjacent(0, 1));
        back.rebuild_caches();
        assert!(back.are_adjacent(0, 1));
        assert_eq!(back.shortest_path(0, 10).unwrap().len(), 5);
    }
}
