//! Benchmarks for structural invariants of generated algebras.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use liealg::prelude::*;

type Q = Rational;

fn bench_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("series");

    for n in [2usize, 4, 8] {
        group.bench_with_input(BenchmarkId::new("heisenberg_lower_central", n), &n, |b, &n| {
            b.iter(|| {
                // Fresh algebra per iteration; the cache would otherwise short-circuit.
                let l = StructureConstantsAlgebra::<Q>::heisenberg(n);
                black_box(l.lower_central_series().len())
            })
        });
        group.bench_with_input(BenchmarkId::new("heisenberg_upper_central", n), &n, |b, &n| {
            b.iter(|| {
                let l = StructureConstantsAlgebra::<Q>::heisenberg(n);
                black_box(l.upper_central_series().len())
            })
        });
    }

    group.bench_function("sl2_derived_series", |b| {
        b.iter(|| {
            let l = StructureConstantsAlgebra::<Q>::sl2();
            black_box(l.derived_series().len())
        })
    });

    group.finish();
}

fn bench_killing(c: &mut Criterion) {
    let mut group = c.benchmark_group("killing");

    group.bench_function("sl2_rational", |b| {
        b.iter(|| {
            let l = StructureConstantsAlgebra::<Q>::sl2();
            black_box(l.is_semisimple())
        })
    });

    group.bench_function("sl2_gf7", |b| {
        b.iter(|| {
            let l = StructureConstantsAlgebra::<Gf7>::sl2();
            black_box(l.is_semisimple())
        })
    });

    group.bench_function("heisenberg4_centralizer", |b| {
        let l = StructureConstantsAlgebra::<Q>::heisenberg(4);
        let s = l.subalgebra([l.generator("p1").unwrap()]).unwrap();
        b.iter(|| black_box(l.centralizer(&s).unwrap().dimension()))
    });

    group.finish();
}

fn bench_uea(c: &mut Criterion) {
    let mut group = c.benchmark_group("uea");

    let l = StructureConstantsAlgebra::<Q>::sl2();
    let u = l.construct_uea();
    let e = u.generator("e").unwrap();
    let f = u.generator("f").unwrap();
    let f2 = u.mul(&f, &f);
    let e2 = u.mul(&e, &e);

    group.bench_function("sl2_f2_e2_normal_form", |b| {
        b.iter(|| black_box(u.mul(black_box(&f2), black_box(&e2))))
    });

    group.finish();
}

criterion_group!(benches, bench_series, bench_killing, bench_uea);
criterion_main!(benches);
