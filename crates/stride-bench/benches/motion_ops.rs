//! Criterion micro-benchmarks for discrete motion validation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use stride_bench::{motion_pairs, reference_validator};
use stride_motion::{LastValid, MotionValidator};

/// Benchmark: midpoint subdivision vs left-to-right scan over 500 motions
/// in a plane with 40 boxes.
fn bench_strategies(c: &mut Criterion) {
    let v = reference_validator(40, 11, 0.01);
    let pairs = motion_pairs(&**v.oracle(), 500, 5);

    let mut group = c.benchmark_group("strategy_40_boxes");
    group.bench_function("subdivide", |b| {
        b.iter(|| {
            for (a, goal) in &pairs {
                black_box(v.check_motion(a, goal));
            }
        });
    });
    group.bench_function("scan_with_last_valid", |b| {
        b.iter(|| {
            for (a, goal) in &pairs {
                let mut lv = LastValid::fraction_only();
                black_box(v.check_motion_with_last_valid(a, goal, &mut lv));
                black_box(lv.fraction);
            }
        });
    });
    group.finish();
}

/// Benchmark: subdivision cost as the probe spacing shrinks.
fn bench_resolution_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("subdivide_by_resolution");
    for resolution in [0.05, 0.01, 0.002] {
        let v = reference_validator(40, 11, resolution);
        let pairs = motion_pairs(&**v.oracle(), 200, 5);
        group.bench_with_input(
            BenchmarkId::from_parameter(resolution),
            &pairs,
            |b, pairs| {
                b.iter(|| {
                    for (a, goal) in pairs {
                        black_box(v.check_motion(a, goal));
                    }
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_resolution_sweep);
criterion_main!(benches);
