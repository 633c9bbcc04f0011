use std::collections::{HashMap, HashSet};

use crate::error::GraphError;
use crate::model::{Edge, NodeId};

// ─────────────────────────────────────────────
// CausalGraph
// ─────────────────────────────────────────────

/// In-memory simple directed graph.
///
/// Invariants, enforced at [`add_edge`](Self::add_edge) and never re-checked
/// downstream:
/// - no self-loops;
/// - at most one edge per ordered pair (the reverse pair is a distinct edge
///   and may coexist).
///
/// Node ids are allocated monotonically from 0 by [`add_node`](Self::add_node),
/// so ids are always dense — dense per-node arrays can be indexed with
/// [`NodeId::index`] directly.
///
/// The graph is single-owner: during a simulation run it is held and mutated
/// exclusively by the rewrite engine, everything else reads it by shared
/// reference.
#[derive(Debug, Clone, Default)]
pub struct CausalGraph {
    next_id: u32,
    /// node → successors, in edge-insertion order.
    outgoing: HashMap<NodeId, Vec<NodeId>>,
    /// Membership index for O(1) edge-existence queries in either direction.
    edge_set: HashSet<(NodeId, NodeId)>,
    /// All edges in insertion order.
    edges: Vec<Edge>,
}

impl CausalGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutations ──────────────────────────────────────

    /// Allocate the next node id.
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert the directed edge `from -> to`.
    ///
    /// Rejects self-loops, duplicate same-direction edges, and endpoints that
    /// were never allocated by this graph.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
        if from.0 >= self.next_id {
            return Err(GraphError::UnknownNode(from));
        }
        if to.0 >= self.next_id {
            return Err(GraphError::UnknownNode(to));
        }
        if from == to {
            return Err(GraphError::SelfLoop(from));
        }
        if !self.edge_set.insert((from, to)) {
            return Err(GraphError::DuplicateEdge(from, to));
        }

        self.outgoing.entry(from).or_default().push(to);
        self.edges.push(Edge::new(from, to));
        Ok(())
    }

    // ── Queries ────────────────────────────────────────

    /// Successors of `node`, in edge-insertion order.
    #[inline]
    pub fn successors(&self, node: NodeId) -> &[NodeId] {
        self.outgoing.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Does the directed edge `from -> to` exist?
    #[inline]
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.edge_set.contains(&(from, to))
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.next_id as usize
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// All node ids, ascending.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.next_id).map(NodeId)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
