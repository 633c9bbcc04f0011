//! The ZPI vacuum: a finite, acyclic, highly symmetric directed tree, and
//! the single symmetry-breaking edge that seeds geometrogenesis.
//!
//! The vacuum is built breadth-first: the root fans out to 3 children, every
//! other internal node to 2, and growth stops at the first complete level
//! that reaches the target count. The final level may overshoot the target
//! by up to one full level — accepted, not corrected.

use causet_graph::{CausalGraph, GraphError, NodeId};

// ─────────────────────────────────────────────
// Vacuum generator
// ─────────────────────────────────────────────

/// Out-degree of the vacuum root.
pub const ROOT_BRANCHING: usize = 3;
/// Out-degree of every non-root internal node.
pub const INTERIOR_BRANCHING: usize = 2;

/// Build the acyclic vacuum for roughly `num_nodes_approx` nodes.
///
/// Returns the graph together with its level structure (node ids per tree
/// depth, in creation order). The levels exist only to locate the first
/// three layers for [`inject_primordial_loop`] and are discarded afterwards.
///
/// Deterministic; no randomness involved. `num_nodes_approx == 1` (or the
/// degenerate 0 — callers validate first) yields the single-root graph.
pub fn generate_vacuum(num_nodes_approx: usize) -> (CausalGraph, Vec<Vec<NodeId>>) {
    let mut g = CausalGraph::new();
    let root = g.add_node();
    let mut levels = vec![vec![root]];

    while g.node_count() < num_nodes_approx {
        let parents = levels
            .last()
            .cloned()
            .unwrap_or_default();
        let mut next_level = Vec::new();

        for parent in parents {
            let fan_out = if parent == root {
                ROOT_BRANCHING
            } else {
                INTERIOR_BRANCHING
            };
            for _ in 0..fan_out {
                let child = g.add_node();
                // Fresh child of an existing parent: cannot violate the
                // simple-graph invariant.
                debug_assert!(!g.has_edge(parent, child));
                let _ = g.add_edge(parent, child);
                next_level.push(child);
            }
        }

        if next_level.is_empty() {
            break;
        }
        levels.push(next_level);
    }

    (g, levels)
}

// ─────────────────────────────────────────────
// Symmetry breaker
// ─────────────────────────────────────────────

/// How the primordial loop was injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Injection {
    /// The closing edge spans the first node of each of levels 0, 1, 2:
    /// `cycle = [v, w, u]` with `v → w → u → v`.
    Standard { cycle: [NodeId; 3] },
    /// The seed was too small for the standard injection; the entire graph
    /// was replaced by a bare 3-node directed cycle. A documented
    /// substitution, not an error.
    Fallback,
}

/// Inject the single primordial 3-cycle that breaks the vacuum's symmetry.
///
/// Adds exactly one closing edge `levels[2][0] → levels[0][0]`, producing
/// exactly one directed 3-cycle and leaving everything else untouched. This
/// is the only place the acyclic invariant is deliberately broken.
pub fn inject_primordial_loop(
    mut graph: CausalGraph,
    levels: &[Vec<NodeId>],
) -> Result<(CausalGraph, Injection), GraphError> {
    if levels.len() > 2 && !levels[2].is_empty() {
        let v = levels[0][0];
        let w = levels[1][0];
        let u = levels[2][0];
        graph.add_edge(u, v)?;
        tracing::info!(%v, %w, %u, "injected primordial 3-cycle");
        return Ok((graph, Injection::Standard { cycle: [v, w, u] }));
    }

    // Seed too small for the standard injection: substitute a minimal
    // standalone 3-cycle as the whole graph.
    tracing::warn!(
        node_count = graph.node_count(),
        "seed too small for standard injection; substituting bare 3-cycle"
    );
    let mut cycle = CausalGraph::new();
    let a = cycle.add_node();
    let b = cycle.add_node();
    let c = cycle.add_node();
    cycle.add_edge(a, b)?;
    cycle.add_edge(b, c)?;
    cycle.add_edge(c, a)?;
    Ok((cycle, Injection::Fallback))
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
