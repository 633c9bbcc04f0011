//! Geometric-purity admissibility oracle.
//!
//! A proposed edge `(u, v)` may only close a *pure* 3-cycle: the sole return
//! path `v → … → u` in the current graph must be a single path of length 2.
//! Anything else — no return path, several return paths, or a return path of
//! the wrong length — would create no 3-cycle, more than one cycle, or merge
//! with a pre-existing longer cycle.

use causet_graph::{simple_paths, CausalGraph, NodeId};

/// Length (in nodes) of a return path that closes a pure 3-cycle.
const PURE_RETURN_PATH_NODES: usize = 3;

/// Decide whether adding the directed edge `u → v` preserves geometric
/// purity.
///
/// Enumerates **all** simple directed paths from `v` to `u` in `g`;
/// permissible iff there is exactly one and it has exactly 3 nodes (edge
/// length 2). Pure and read-only — the verdict is a function of the graph
/// state at the moment of the call, so callers re-query after every commit.
pub fn is_permissible(g: &CausalGraph, u: NodeId, v: NodeId) -> bool {
    let paths = simple_paths(g, v, u);
    paths.len() == 1 && paths[0].len() == PURE_RETURN_PATH_NODES
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// v → w → u: the canonical pure configuration for proposing (u, v).
    fn two_hop() -> (CausalGraph, NodeId, NodeId, NodeId) {
        let mut g = CausalGraph::new();
        let v = g.add_node();
        let w = g.add_node();
        let u = g.add_node();
        g.add_edge(v, w).unwrap();
        g.add_edge(w, u).unwrap();
        (g, v, w, u)
    }

    #[test]
    fn single_length_two_return_path_is_permissible() {
        let (g, v, _, u) = two_hop();
        assert!(is_permissible(&g, u, v));
    }

    #[test]
    fn no_return_path_is_not_permissible() {
        let (g, v, w, _) = two_hop();
        // Proposing (w, v): only path v→w has length 1.
        assert!(!is_permissible(&g, w, v));
        // Proposing (v, u) backwards: no path from u to v at all.
        let (g, v, _, u) = two_hop();
        assert!(!is_permissible(&g, v, u));
    }

    #[test]
    fn two_parallel_return_paths_are_not_permissible() {
        let (mut g, v, _, u) = two_hop();
        let w2 = g.add_node();
        g.add_edge(v, w2).unwrap();
        g.add_edge(w2, u).unwrap();
        // v → w → u and v → w2 → u: two pure candidates is still impure.
        assert!(!is_permissible(&g, u, v));
    }

    #[test]
    fn longer_shortest_return_path_is_not_permissible() {
        let mut g = CausalGraph::new();
        let v = g.add_node();
        let a = g.add_node();
        let b = g.add_node();
        let u = g.add_node();
        g.add_edge(v, a).unwrap();
        g.add_edge(a, b).unwrap();
        g.add_edge(b, u).unwrap();
        // Only return path has length 3 — would close a 4-cycle.
        assert!(!is_permissible(&g, u, v));
    }

    #[test]
    fn extra_long_path_alongside_the_pure_one_is_not_permissible() {
        let (mut g, v, w, u) = two_hop();
        let d = g.add_node();
        g.add_edge(w, d).unwrap();
        g.add_edge(d, u).unwrap();
        // v→w→u (pure) plus v→w→d→u: the extra long path disqualifies.
        assert!(!is_permissible(&g, u, v));
    }

    #[test]
    fn oracle_is_deterministic_and_pure() {
        let (g, v, _, u) = two_hop();
        let first = is_permissible(&g, u, v);
        for _ in 0..10 {
            assert_eq!(is_permissible(&g, u, v), first);
        }
        // The graph is untouched.
        assert_eq!(g.edge_count(), 2);
    }
}
