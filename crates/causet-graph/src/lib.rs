//! # causet-graph
//!
//! Directed causal-graph substrate for the causet simulator.
//!
//! Provides the core data model and read paths the rewrite dynamics build on:
//! - [`model::NodeId`] — monotonically assigned integer node identity
//! - [`model::Edge`]   — ordered `(from, to)` pair with canonical ordering
//! - [`graph::CausalGraph`] — simple directed graph (no self-loops, no
//!   parallel same-direction edges) with successor and edge-existence queries
//! - [`paths`]  — exhaustive simple-path enumeration + acyclicity check
//! - [`census`] — adjacency matrix and the `trace(A³)/3` 3-cycle count

pub mod census;
pub mod error;
pub mod graph;
pub mod model;
pub mod paths;

pub use census::{adjacency_matrix, three_cycle_count};
pub use error::GraphError;
pub use graph::CausalGraph;
pub use model::{Edge, NodeId};
pub use paths::{is_acyclic, simple_paths};
