use std::fmt;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// NodeId
// ─────────────────────────────────────────────

/// Identity of a node in the causal graph.
///
/// Ids are assigned monotonically by [`crate::graph::CausalGraph::add_node`]
/// starting from 0 and carry no other state. The derived `Ord` gives the
/// ascending-id order used for canonical candidate sorting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Index into dense per-node arrays (adjacency matrix rows, etc.).
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─────────────────────────────────────────────
// Edge
// ─────────────────────────────────────────────

/// A directed edge `(from, to)`.
///
/// The graph stores at most one edge per ordered pair; the reverse pair is a
/// distinct edge and may coexist. The derived `Ord` sorts by `(from, to)`,
/// which is the canonical ordering the rewrite engine relies on for
/// reproducible candidate evaluation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
