//! Criterion benchmarks for the admissibility oracle and a full rewrite step.
//!
//! Run with:
//! ```bash
//! cargo bench -p causet-sim
//! ```

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use causet_graph::CausalGraph;
use causet_sim::{
    config::temperature, generate_vacuum, inject_primordial_loop, is_permissible, RewriteEngine,
};

// ── helpers ─────────────────────────────────────────────────────────────────

fn injected_seed(n: usize) -> CausalGraph {
    let (g, levels) = generate_vacuum(n);
    let (g, _) = inject_primordial_loop(g, &levels).expect("seed construction");
    g
}

// ── oracle ──────────────────────────────────────────────────────────────────

fn bench_oracle(c: &mut Criterion) {
    let mut group = c.benchmark_group("sim/oracle");
    for n in [10usize, 40, 94] {
        let g = injected_seed(n);
        // Probe the back-edge of the first 2-hop path off the root's
        // second branch: admissible on the fresh seed.
        let root = g.nodes().next().unwrap();
        let w = g.successors(root)[1];
        let u = g.successors(w)[0];

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| is_permissible(&g, u, root));
        });
    }
    group.finish();
}

// ── full step ───────────────────────────────────────────────────────────────

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("sim/step");
    for n in [10usize, 40] {
        let g = injected_seed(n);
        let engine = RewriteEngine::new(1.0, temperature(g.node_count()));

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter_batched(
                || (g.clone(), StdRng::seed_from_u64(42)),
                |(mut graph, mut rng)| engine.step(&mut graph, &mut rng).expect("step"),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_oracle, bench_step);
criterion_main!(benches);
