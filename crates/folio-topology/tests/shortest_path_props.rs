//! Property-based tests for shortest-path queries on the sample device.
//!
//! BFS results are checked against an exhaustive search over simple paths,
//! which is cheap on an 11-node graph.

use folio_topology::Topology;
use proptest::prelude::*;

/// Length (in hops) of the shortest simple path found by exhaustive DFS.
fn exhaustive_hops(t: &Topology, from: u32, to: u32) -> Option<usize> {
    fn dfs(t: &Topology, current: u32, to: u32, visited: &mut Vec<u32>, best: &mut Option<usize>) {
        if current == to {
            let hops = visited.len() - 1;
            if best.is_none_or(|b| hops < b) {
                *best = Some(hops);
            }
            return;
        }
        let neighbors: Vec<u32> = t.neighbors(current).collect();
        for n in neighbors {
            if !visited.contains(&n) {
                visited.push(n);
                dfs(t, n, to, visited, best);
                visited.pop();
            }
        }
    }

    let mut best = None;
    let mut visited = vec![from];
    dfs(t, from, to, &mut visited, &mut best);
    best
}

fn node_id() -> impl Strategy<Value = u32> {
    0_u32..11
}

proptest! {
    #[test]
    fn prop_path_lengths_are_symmetric(a in node_id(), b in node_id()) {
        let t = Topology::sample();
        let ab = t.shortest_path(a, b).unwrap();
        let ba = t.shortest_path(b, a).unwrap();
        prop_assert_eq!(ab.len(), ba.len());
    }

    #[test]
    fn prop_path_is_optimal(a in node_id(), b in node_id()) {
        let t = Topology::sample();
        let path = t.shortest_path(a, b).unwrap();
        prop_assert_eq!(Some(path.len() - 1), exhaustive_hops(&t, a, b));
    }

    #[test]
    fn prop_path_is_walkable(a in node_id(), b in node_id()) {
        let t = Topology::sample();
        let path = t.shortest_path(a, b).unwrap();
        prop_assert_eq!(path.first().copied(), Some(a));
        prop_assert_eq!(path.last().copied(), Some(b));
        for pair in path.windows(2) {
            prop_assert!(t.are_adjacent(pair[0], pair[1]));
        }
    }

    #[test]
    fn prop_zero_swaps_iff_adjacent(a in node_id(), b in node_id()) {
        prop_assume!(a != b);
        let t = Topology::sample();
        let swaps = t.swap_count(a, b).unwrap();
        prop_assert_eq!(swaps == Some(0), t.are_adjacent(a, b));
    }

    #[test]
    fn prop_unknown_nodes_rejected(a in node_id(), bad in 11_u32..1000) {
        let t = Topology::sample();
        prop_assert!(t.shortest_path(a, bad).is_err());
        prop_assert!(t.shortest_path(bad, a).is_err());
        prop_assert!(!t.are_adjacent(a, bad));
    }
}
