use std::collections::HashMap;

use criterion::{criterion_group, criterion_main, Criterion};
use nalgebra::Vector2;
use sentinel_topology::alpha::{AlphaComplex, DelaunayAlphaKernel2};
use sentinel_topology::cmap::{CombinatorialMap, CombinatorialMap2};

fn ring_points(n: usize) -> HashMap<usize, Vector2<f64>> {
    (0..n)
        .map(|i| {
            let theta = i as f64 / n as f64 * std::f64::consts::TAU;
            (i, Vector2::new(theta.cos(), theta.sin()))
        })
        .collect()
}

fn bench_boundary_cycle_enumeration(c: &mut Criterion) {
    let points = ring_points(200);
    let kernel = DelaunayAlphaKernel2;
    let complex = AlphaComplex::build_2d(&points, 0.3, &kernel).expect("build alpha complex");
    let edges = complex.edges();

    c.bench_function("combinatorial_map2_build_200_points", |b| {
        b.iter(|| {
            let map = CombinatorialMap2::build(&points, &edges);
            criterion::black_box(map.boundary_cycles().len())
        })
    });
}

criterion_group!(benches, bench_boundary_cycle_enumeration);
criterion_main!(benches);
