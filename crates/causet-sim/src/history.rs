use serde::{Deserialize, Serialize};

use causet_graph::{three_cycle_count, CausalGraph};

// ─────────────────────────────────────────────
// HistoryRecord
// ─────────────────────────────────────────────

/// One row of the per-step history — the sole artifact handed to external
/// persistence and plotting collaborators.
///
/// The first record of every run is the post-injection initial state and
/// carries `step = -1`; committed steps follow with ascending indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Step index; `-1` for the initial state.
    pub step: i64,
    /// `trace(A³)/3` — integral up to float roundoff.
    pub n3_count: f64,
    /// Total edges after this step's commit.
    pub edge_count: usize,
    /// Edges newly committed this step (0 for the initial record and for
    /// the converging step).
    pub new_edges: usize,
}

impl HistoryRecord {
    /// Snapshot the committed graph after a step.
    pub fn capture(step: i64, graph: &CausalGraph, new_edges: usize) -> Self {
        Self {
            step,
            n3_count: three_cycle_count(graph),
            edge_count: graph.edge_count(),
            new_edges,
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_reads_counts_off_the_graph() {
        let mut g = CausalGraph::new();
        let a = g.add_node();
        let b = g.add_node();
        let c = g.add_node();
        for (u, v) in [(a, b), (b, c), (c, a)] {
            g.add_edge(u, v).unwrap();
        }

        let record = HistoryRecord::capture(-1, &g, 0);
        assert_eq!(record.step, -1);
        assert_eq!(record.edge_count, 3);
        assert_eq!(record.new_edges, 0);
        assert!((record.n3_count - 1.0).abs() < 1e-9);
    }
}
