// Copyright 2026 the Natspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of spline construction and evaluation.

#![expect(missing_docs, reason = "criterion emits undocumented functions")]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use natspline::{NaturalSpline, Point};

fn knots(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let x = i as f64 * 0.5;
            Point::new(x, (x * 1.3).sin() * 10.0 + x)
        })
        .collect()
}

fn bench_build(cc: &mut Criterion) {
    for n in [6, 64, 1024] {
        let points = knots(n);
        cc.bench_with_input(BenchmarkId::new("build", n), &points, |bb, points| {
            bb.iter(|| NaturalSpline::new(black_box(points).iter().copied()));
        });
    }
}

fn bench_eval(cc: &mut Criterion) {
    for n in [6, 64, 1024] {
        let spline = NaturalSpline::new(knots(n)).unwrap();
        let (min, max) = spline.domain();
        let x = min + 0.37 * (max - min);
        cc.bench_with_input(BenchmarkId::new("eval", n), &spline, |bb, spline| {
            bb.iter(|| black_box(spline).eval(black_box(x)));
        });
    }
}

fn bench_samples(cc: &mut Criterion) {
    let spline = NaturalSpline::new(knots(64)).unwrap();
    let (min, max) = spline.domain();
    cc.bench_function("samples step 0.01", |bb| {
        bb.iter(|| {
            black_box(&spline)
                .samples(min, max, 0.01)
                .unwrap()
                .map(|p| p.y)
                .sum::<f64>()
        });
    });
}

criterion_group!(benches, bench_build, bench_eval, bench_samples);
criterion_main!(benches);
