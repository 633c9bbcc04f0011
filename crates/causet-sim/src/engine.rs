//! [`RewriteEngine`] — the per-step cycle-closing rewrite protocol.
//!
//! ## Step protocol
//!
//! 1. **Scan** — for every directed edge `(v, w)` and every successor `u` of
//!    `w` (every 2-hop path `v → w → u`), propose the back-edge `(u, v)`
//!    unless `u == v` or the edge already exists. No mutations during the
//!    scan: the edge set iterated over is the pre-step state.
//! 2. **Dedup** — the same pair is often discovered through several 2-hop
//!    paths; candidates collapse into a `BTreeSet`, whose ascending
//!    `(source, target)` iteration is the canonical evaluation order. This
//!    ordering is the determinism contract: one seed, one run.
//! 3. **Test + accept** — each candidate is checked by the purity oracle
//!    against the pre-step graph, then accepted with probability
//!    `P = min(1, e^{-(α−T)/T})`. Exactly one uniform draw is consumed per
//!    admissible candidate; inadmissible candidates consume none.
//! 4. **Commit** — all accepted edges are added as one batch. An empty batch
//!    means the system has reached its stable plateau.

use std::collections::BTreeSet;

use rand::Rng;

use causet_graph::{CausalGraph, Edge, GraphError, NodeId};

use crate::oracle::is_permissible;

// ─────────────────────────────────────────────
// Engine
// ─────────────────────────────────────────────

/// Cycle-closing rewrite engine.
///
/// Holds only the run's frozen parameters; the graph and the RNG stay with
/// the driver and are lent to [`step`](Self::step) for its duration.
#[derive(Debug, Clone)]
pub struct RewriteEngine {
    /// Coupling constant α.
    pub alpha: f64,
    /// Run temperature, frozen at run start (see [`crate::config::temperature`]).
    pub temperature: f64,
}

impl RewriteEngine {
    pub fn new(alpha: f64, temperature: f64) -> Self {
        Self { alpha, temperature }
    }

    /// Metropolis-style acceptance probability `min(1, e^{-(α−T)/T})`,
    /// identical for every candidate of the run.
    pub fn acceptance_probability(&self) -> f64 {
        let delta_f = self.alpha - self.temperature;
        (-delta_f / self.temperature).exp().min(1.0)
    }

    /// Run one rewrite step against `graph`.
    pub fn step(
        &self,
        graph: &mut CausalGraph,
        rng: &mut impl Rng,
    ) -> Result<StepReport, GraphError> {
        // ── Scan + dedup ────────────────────────────────────────────────
        let mut candidates: BTreeSet<(NodeId, NodeId)> = BTreeSet::new();
        for edge in graph.edges() {
            let (v, w) = (edge.from, edge.to);
            for &u in graph.successors(w) {
                if u != v && !graph.has_edge(u, v) {
                    candidates.insert((u, v));
                }
            }
        }

        // ── Test + accept, in canonical order ───────────────────────────
        let p = self.acceptance_probability();
        let mut admissible = 0usize;
        let mut accepted: Vec<Edge> = Vec::new();

        for &(u, v) in &candidates {
            if !is_permissible(graph, u, v) {
                continue;
            }
            admissible += 1;
            if rng.gen::<f64>() < p {
                accepted.push(Edge::new(u, v));
            }
        }

        // ── Commit the batch ────────────────────────────────────────────
        for edge in &accepted {
            graph.add_edge(edge.from, edge.to)?;
        }

        Ok(StepReport {
            candidates: candidates.len(),
            admissible,
            accepted,
        })
    }
}

// ─────────────────────────────────────────────
// Report
// ─────────────────────────────────────────────

/// Outcome of one [`RewriteEngine::step`].
#[derive(Debug, Clone)]
pub struct StepReport {
    /// Unique back-edge proposals discovered this step.
    pub candidates: usize,
    /// Candidates that passed the purity oracle.
    pub admissible: usize,
    /// Edges committed this step, in canonical order.
    pub accepted: Vec<Edge>,
}

impl StepReport {
    /// `true` when the step committed nothing — the run's terminal plateau.
    pub fn is_plateau(&self) -> bool {
        self.accepted.is_empty()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
