//! Criterion benchmarks for fan triangulation and dual reconstruction.
//! Focus sizes: n in {8, 32, 64, 128} polygon vertices.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use fandual::api::{
    build_dual, draw_convex_polygon, fan_mesh_edges, triangulate, DualCfg, Grouping, Polygon,
    RadialCfg, ReplayToken, TriangulateCfg, VertexCount,
};

fn polygon(n: usize, seed: u64) -> Polygon {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        radial_jitter: 0.0,
        ..RadialCfg::default()
    };
    draw_convex_polygon(cfg, ReplayToken { seed, index: 0 }).unwrap_or_default()
}

fn bench_dual(c: &mut Criterion) {
    let mut group = c.benchmark_group("fandual");
    for &n in &[8usize, 32, 64, 128] {
        group.bench_with_input(BenchmarkId::new("triangulate", n), &n, |b, &n| {
            let poly = polygon(n, 41);
            b.iter(|| {
                let _edges = triangulate(&poly.vertices, TriangulateCfg::default());
            })
        });

        for (name, grouping) in [
            ("dual_accumulate", Grouping::Accumulate),
            ("dual_per_triangle", Grouping::PerTriangle),
        ] {
            group.bench_with_input(BenchmarkId::new(name, n), &n, |b, &n| {
                b.iter_batched(
                    || {
                        fan_mesh_edges(&polygon(n, 42).vertices, TriangulateCfg::default())
                            .unwrap_or_default()
                    },
                    |edges| {
                        let cfg = DualCfg {
                            strict_mode: false,
                            grouping,
                        };
                        let _g = build_dual(&edges, cfg);
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_dual);
criterion_main!(benches);
