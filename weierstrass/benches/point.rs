//! `AffinePoint` benchmarks on a BN curve with a 66-bit prime

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use primefield::Field;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use weierstrass::Curve;

const P: u128 = 41757809636915444053;
const Y: u128 = 9631350269402864633;
const SCALAR: u128 = 0x1ccb_e91c_075f_c7f4;

fn curve() -> Curve {
    let field = Field::new(P, &mut ChaCha8Rng::seed_from_u64(0)).unwrap();
    Curve::from_coefficients(field, 0, 2).unwrap()
}

fn bench_point_add<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let curve = curve();
    let p = curve.point(1, Y).unwrap();
    let q = p.mul(SCALAR).unwrap();
    group.bench_function("add", |b| b.iter(|| p.add(&q)));
}

fn bench_point_double<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let curve = curve();
    let p = curve.point(1, Y).unwrap();
    group.bench_function("double", |b| b.iter(|| p.double()));
}

fn bench_point_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let curve = curve();
    let p = curve.point(1, Y).unwrap();
    group.bench_function("mul", |b| b.iter(|| p.mul(SCALAR)));
}

fn bench_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("point operations");
    bench_point_add(&mut group);
    bench_point_double(&mut group);
    bench_point_mul(&mut group);
    group.finish();
}

criterion_group!(benches, bench_point);
criterion_main!(benches);
