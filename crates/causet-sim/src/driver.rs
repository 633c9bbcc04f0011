//! Run loop and termination.
//!
//! State machine: `INIT → RUNNING → {CONVERGED, EXHAUSTED}`.
//!
//! INIT builds the vacuum, injects the primordial loop, freezes the
//! temperature from the post-injection node count, and records the step −1
//! history entry. RUNNING invokes the rewrite engine for up to
//! `config.steps` iterations, appending one [`HistoryRecord`] per step —
//! including the converging step, whose `new_edges = 0` record closes the
//! history. Both terminal states are valid, non-error ends of a run; only
//! the trigger differs.

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use causet_graph::{CausalGraph, GraphError};

use crate::config::{temperature, ConfigError, SimulationConfig};
use crate::engine::RewriteEngine;
use crate::history::HistoryRecord;
use crate::vacuum::{generate_vacuum, inject_primordial_loop, Injection};

// ─────────────────────────────────────────────
// Outcome
// ─────────────────────────────────────────────

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A step's accepted batch was empty before the budget ran out — the
    /// expected end state ("stable plateau").
    Converged { step: usize },
    /// The step budget was exhausted with edges still being accepted.
    Exhausted,
}

/// A finished run: the full history plus the final graph.
#[derive(Debug, Clone)]
pub struct SimulationRun {
    /// Append-only per-step records, step −1 through the final step.
    pub history: Vec<HistoryRecord>,
    pub outcome: Outcome,
    /// The graph at termination.
    pub graph: CausalGraph,
    /// Whether the standard injection or the documented small-seed fallback
    /// produced the initial state.
    pub injection: Injection,
}

// ─────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

// ─────────────────────────────────────────────
// Driver
// ─────────────────────────────────────────────

/// Execute a full simulation run.
pub fn run(config: &SimulationConfig) -> Result<SimulationRun, SimError> {
    config.validate()?;

    // INIT
    let (vacuum, levels) = generate_vacuum(config.num_nodes_approx);
    let (mut graph, injection) = inject_primordial_loop(vacuum, &levels)?;

    let t = temperature(graph.node_count());
    let engine = RewriteEngine::new(config.alpha, t);
    let mut rng = StdRng::seed_from_u64(config.seed);

    tracing::info!(
        nodes = graph.node_count(),
        steps = config.steps,
        alpha = config.alpha,
        temperature = t,
        seed = config.seed,
        "starting causal-network run"
    );

    let mut history = vec![HistoryRecord::capture(-1, &graph, 0)];

    // RUNNING
    let mut outcome = Outcome::Exhausted;
    for step in 0..config.steps {
        let report = engine.step(&mut graph, &mut rng)?;
        let record = HistoryRecord::capture(step as i64, &graph, report.accepted.len());
        tracing::info!(
            step,
            n3 = record.n3_count,
            edges = record.edge_count,
            new_edges = record.new_edges,
            "step committed"
        );
        history.push(record);

        if report.is_plateau() {
            tracing::info!(step, "stable plateau reached");
            outcome = Outcome::Converged { step };
            break;
        }
    }

    Ok(SimulationRun {
        history,
        outcome,
        graph,
        injection,
    })
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
