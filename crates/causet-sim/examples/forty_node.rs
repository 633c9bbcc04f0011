//! Canonical 40-node run: inflationary nucleation followed by a plateau.
//!
//! ```bash
//! cargo run -p causet-sim --example forty_node
//! ```

use causet_sim::{run, Outcome, SimulationConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = SimulationConfig::default();
    let result = run(&config).expect("default config is valid");

    println!("step     N3  edges  new");
    for r in &result.history {
        println!(
            "{:>4}  {:>5.0}  {:>5}  {:>3}",
            r.step, r.n3_count, r.edge_count, r.new_edges
        );
    }

    match result.outcome {
        Outcome::Converged { step } => println!("plateau reached at step {step}"),
        Outcome::Exhausted => println!("step budget exhausted"),
    }
    let last = result.history.last().expect("history is never empty");
    println!(
        "final state: {:.0} 3-cycles, {} edges, {} nodes",
        last.n3_count,
        last.edge_count,
        result.graph.node_count()
    );
}
