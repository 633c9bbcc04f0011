use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─────────────────────────────────────────────
// SimulationConfig
// ─────────────────────────────────────────────

/// Immutable parameters of one simulation run.
///
/// Fixed for the run's lifetime; the driver validates once before any state
/// is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Target node count for the vacuum. The generator stops at the first
    /// complete level that reaches this count, so the actual count may
    /// overshoot by up to one level.
    pub num_nodes_approx: usize,
    /// Step budget. Zero is a valid zero-iteration run.
    pub steps: usize,
    /// Coupling constant α in the acceptance rule `P = min(1, e^{-(α−T)/T})`.
    pub alpha: f64,
    /// Seed for the run's single RNG.
    pub seed: u64,
}

impl SimulationConfig {
    /// Reject configurations that cannot start a run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_nodes_approx == 0 {
            return Err(ConfigError::NodeCountZero);
        }
        Ok(())
    }
}

/// The canonical 40-node run.
impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_nodes_approx: 40,
            steps: 50,
            alpha: 1.0,
            seed: 42,
        }
    }
}

// ─────────────────────────────────────────────
// Temperature
// ─────────────────────────────────────────────

/// Run temperature `T = 1 / ln(N)` for `N > 1`, else `1.0`.
///
/// Computed once from the post-injection node count and held constant for
/// the whole run. A per-step re-derivation is deliberately not done.
pub fn temperature(node_count: usize) -> f64 {
    if node_count > 1 {
        1.0 / (node_count as f64).ln()
    } else {
        1.0
    }
}

// ─────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("num_nodes_approx must be positive")]
    NodeCountZero,
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
