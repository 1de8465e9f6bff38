//! Criterion benchmarks for the diagram pipeline.
//! Sizes sweep the catalog's crossing range (1..=10).
//! Results land under target/criterion by default.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use knots::api::{build_graph, build_scene, pd_code, trace_path, Knot};

fn bench_diagram(c: &mut Criterion) {
    let mut group = c.benchmark_group("diagram");
    for name in ["Unknot", "Cinquefoil", "10₁₆₁"] {
        let pd = pd_code(name).expect("catalog entry");
        group.bench_with_input(BenchmarkId::new("graph_and_trace", name), &pd, |b, pd| {
            b.iter(|| {
                let g = build_graph(pd);
                trace_path(&g)
            })
        });
        group.bench_with_input(BenchmarkId::new("full_scene", name), &pd, |b, pd| {
            b.iter(|| {
                let knot = Knot::from_pd(name, pd.clone());
                build_scene(&knot, "bench")
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_diagram);
criterion_main!(benches);
