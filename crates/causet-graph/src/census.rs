//! 3-cycle census via the adjacency-matrix trace.
//!
//! `N₃ = trace(A³) / 3` counts closed walks of length 3; with self-loops
//! structurally excluded every such walk visits 3 distinct nodes, so the
//! quotient is the directed 3-cycle count (each cycle contributes one walk
//! per rotation). The value is real only because it comes out of a float
//! matrix product — integral up to roundoff.

use ndarray::Array2;

use crate::graph::CausalGraph;

/// Dense 0/1 adjacency matrix, rows and columns in ascending node-id order.
pub fn adjacency_matrix(g: &CausalGraph) -> Array2<f64> {
    let n = g.node_count();
    let mut a = Array2::<f64>::zeros((n, n));
    for edge in g.edges() {
        a[[edge.from.index(), edge.to.index()]] = 1.0;
    }
    a
}

/// Number of directed 3-cycles, computed as `trace(A³) / 3`.
pub fn three_cycle_count(g: &CausalGraph) -> f64 {
    if g.node_count() == 0 {
        return 0.0;
    }
    let a = adjacency_matrix(g);
    let a3 = a.dot(&a).dot(&a);
    a3.diag().sum() / 3.0
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeId;

    /// Independent brute force: ordered triples (u, v, w) with edges
    /// u→v, v→w, w→u; each 3-cycle is found once per rotation.
    fn brute_force_three_cycles(g: &CausalGraph) -> f64 {
        let mut walks = 0u64;
        for u in g.nodes() {
            for v in g.nodes() {
                for w in g.nodes() {
                    if g.has_edge(u, v) && g.has_edge(v, w) && g.has_edge(w, u) {
                        walks += 1;
                    }
                }
            }
        }
        walks as f64 / 3.0
    }

    fn triangle() -> CausalGraph {
        let mut g = CausalGraph::new();
        let a = g.add_node();
        let b = g.add_node();
        let c = g.add_node();
        for (u, v) in [(a, b), (b, c), (c, a)] {
            g.add_edge(u, v).unwrap();
        }
        g
    }

    #[test]
    fn empty_graph_has_zero_cycles() {
        assert_eq!(three_cycle_count(&CausalGraph::new()), 0.0);
    }

    #[test]
    fn single_triangle_counts_once() {
        assert_eq!(three_cycle_count(&triangle()), 1.0);
    }

    #[test]
    fn reversed_triangle_counts_separately() {
        let mut g = triangle();
        // Add the reversed orientation: a←b←c←a. Together with the original
        // this makes two distinct directed 3-cycles (and three 2-cycles,
        // which trace(A³) does not see).
        let (a, b, c) = (NodeId(0), NodeId(1), NodeId(2));
        for (u, v) in [(b, a), (c, b), (a, c)] {
            g.add_edge(u, v).unwrap();
        }
        assert!((three_cycle_count(&g) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn tree_has_zero_cycles() {
        let mut g = CausalGraph::new();
        let root = g.add_node();
        let kids: Vec<NodeId> = (0..3).map(|_| g.add_node()).collect();
        for &k in &kids {
            g.add_edge(root, k).unwrap();
        }
        assert_eq!(three_cycle_count(&g), 0.0);
    }

    #[test]
    fn trace_matches_brute_force_on_layered_graph() {
        // Tree with one closing edge (the simulator's initial shape) plus a
        // couple of extra chords. No self-loops, no 2-cycles.
        let mut g = CausalGraph::new();
        let n: Vec<NodeId> = (0..7).map(|_| g.add_node()).collect();
        for (u, v) in [
            (0, 1), (0, 2), (0, 3), // root fan-out
            (1, 4), (1, 5), (2, 6), // second layer
            (4, 0), // closes 0→1→4→0
            (6, 0), // closes 0→2→6→0
            (5, 2), // chord, no new 3-cycle
        ] {
            g.add_edge(n[u], n[v]).unwrap();
        }

        let traced = three_cycle_count(&g);
        assert!((traced - brute_force_three_cycles(&g)).abs() < 1e-9);
        assert!((traced - 2.0).abs() < 1e-9);
    }

    #[test]
    fn adjacency_matrix_is_zero_one_in_id_order() {
        let g = triangle();
        let a = adjacency_matrix(&g);
        assert_eq!(a.shape(), &[3, 3]);
        assert_eq!(a[[0, 1]], 1.0);
        assert_eq!(a[[1, 2]], 1.0);
        assert_eq!(a[[2, 0]], 1.0);
        assert_eq!(a[[1, 0]], 0.0);
        assert_eq!(a.sum(), 3.0);
    }
}
