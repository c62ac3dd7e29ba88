//! Benchmarks for exact row reduction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use liealg::prelude::*;

/// A dense `n × n` matrix with small integer entries.
fn dense<F: Field>(n: usize) -> Matrix<F> {
    let entries: Vec<i64> = (0..n * n)
        .map(|k| {
            let (i, j) = ((k / n) as i64, (k % n) as i64);
            (i + 1) * (j + 2) % 7 + i64::from(i == j) * 5
        })
        .collect();
    Matrix::from_i64(n, n, &entries)
}

fn bench_echelon(c: &mut Criterion) {
    let mut group = c.benchmark_group("echelon");

    for n in [4usize, 8, 16] {
        group.throughput(Throughput::Elements((n * n) as u64));
        let q = dense::<Rational>(n);
        group.bench_with_input(BenchmarkId::new("rational", n), &q, |b, m| {
            b.iter(|| black_box(m.echelon_form()))
        });
        let p = dense::<Gf7>(n);
        group.bench_with_input(BenchmarkId::new("gf7", n), &p, |b, m| {
            b.iter(|| black_box(m.echelon_form()))
        });
    }

    group.finish();
}

fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel");

    for n in [4usize, 8, 16] {
        let m = dense::<Rational>(n).truncate_rows(n / 2);
        group.bench_with_input(BenchmarkId::new("right_kernel", n), &m, |b, m| {
            b.iter(|| black_box(m.right_kernel()))
        });
        let base = dense::<Rational>(n);
        group.bench_with_input(BenchmarkId::new("determinant", n), &base, |b, m| {
            b.iter(|| black_box(m.determinant()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_echelon, bench_kernel);
criterion_main!(benches);
