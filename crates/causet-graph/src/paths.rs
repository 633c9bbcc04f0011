//! Exhaustive simple-path enumeration and acyclicity checking.
//!
//! [`simple_paths`] is the read path behind the simulator's admissibility
//! test: it is re-run against the live graph on every proposed edge, which is
//! the dominant cost of a run. The enumeration is exponential in pathological
//! dense graphs; intended inputs stay sparse because the purity constraint
//! caps growth.

use std::collections::HashSet;

use crate::graph::CausalGraph;
use crate::model::NodeId;

// ─────────────────────────────────────────────
// Simple paths
// ─────────────────────────────────────────────

/// Enumerate **all** simple directed paths from `source` to `target`.
///
/// Each path is the full node sequence `[source, .., target]`; a path of
/// edge-length 2 therefore has 3 entries. Paths have at least one edge, so
/// `source == target` yields no paths. Results are in DFS discovery order
/// over each node's successor list.
pub fn simple_paths(g: &CausalGraph, source: NodeId, target: NodeId) -> Vec<Vec<NodeId>> {
    let mut found = Vec::new();
    if source == target {
        return found;
    }

    let mut prefix = vec![source];
    let mut seen: HashSet<NodeId> = HashSet::from([source]);
    extend(g, source, target, &mut prefix, &mut seen, &mut found);
    found
}

fn extend(
    g: &CausalGraph,
    current: NodeId,
    target: NodeId,
    prefix: &mut Vec<NodeId>,
    seen: &mut HashSet<NodeId>,
    found: &mut Vec<Vec<NodeId>>,
) {
    for &next in g.successors(current) {
        if next == target {
            let mut path = prefix.clone();
            path.push(target);
            found.push(path);
        } else if !seen.contains(&next) {
            seen.insert(next);
            prefix.push(next);
            extend(g, next, target, prefix, seen, found);
            prefix.pop();
            seen.remove(&next);
        }
    }
}

// ─────────────────────────────────────────────
// Acyclicity
// ─────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    White,
    Grey,
    Black,
}

/// `true` iff the graph contains no directed cycle.
///
/// Iterative three-colour DFS; a grey→grey edge is a back edge.
pub fn is_acyclic(g: &CausalGraph) -> bool {
    let mut mark = vec![Mark::White; g.node_count()];

    for start in g.nodes() {
        if mark[start.index()] != Mark::White {
            continue;
        }
        mark[start.index()] = Mark::Grey;
        // stack frames: (node, next successor index to try)
        let mut stack: Vec<(NodeId, usize)> = vec![(start, 0)];

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let succ = g.successors(node);
            if frame.1 < succ.len() {
                let next = succ[frame.1];
                frame.1 += 1;
                match mark[next.index()] {
                    Mark::Grey => return false,
                    Mark::White => {
                        mark[next.index()] = Mark::Grey;
                        stack.push((next, 0));
                    }
                    Mark::Black => {}
                }
            } else {
                mark[node.index()] = Mark::Black;
                stack.pop();
            }
        }
    }

    true
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
