//! `causet-sim` — stochastic cycle-closing growth over a causal graph.
//!
//! Models the evolution of a directed causal network from a perturbed
//! symmetric vacuum: a rapid phase of 3-cycle nucleation under a geometric
//! purity constraint, settling into a stable plateau.
//!
//! ## Crate structure
//!
//! | Module      | Responsibility                                            |
//! |-------------|-----------------------------------------------------------|
//! | [`config`]  | [`SimulationConfig`], validation, frozen temperature      |
//! | [`vacuum`]  | Symmetric acyclic seed + primordial 3-cycle injection     |
//! | [`oracle`]  | Geometric-purity admissibility test for proposed edges    |
//! | [`engine`]  | Per-step scan → dedup → accept → commit rewrite protocol  |
//! | [`history`] | Append-only per-step [`HistoryRecord`] sequence           |
//! | [`driver`]  | Run loop, termination states, history ownership           |
//!
//! ## Quick start
//!
//! ```rust
//! use causet_sim::{driver, SimulationConfig};
//!
//! let run = driver::run(&SimulationConfig {
//!     num_nodes_approx: 10,
//!     steps: 5,
//!     alpha: 1.0,
//!     seed: 42,
//! })
//! .unwrap();
//!
//! assert_eq!(run.history[0].step, -1);
//! assert_eq!(run.history[0].n3_count.round(), 1.0);
//! ```

pub mod config;
pub mod driver;
pub mod engine;
pub mod history;
pub mod oracle;
pub mod vacuum;

// ── Config ────────────────────────────────────────────────────────────────────
pub use config::{temperature, ConfigError, SimulationConfig};

// ── Vacuum / injection ────────────────────────────────────────────────────────
pub use vacuum::{generate_vacuum, inject_primordial_loop, Injection};

// ── Oracle ────────────────────────────────────────────────────────────────────
pub use oracle::is_permissible;

// ── Engine / driver ───────────────────────────────────────────────────────────
pub use driver::{run, Outcome, SimError, SimulationRun};
pub use engine::{RewriteEngine, StepReport};
pub use history::HistoryRecord;
