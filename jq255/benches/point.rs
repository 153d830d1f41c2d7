//! jq255 group arithmetic benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use hex_literal::hex;
use jq255::{Curve, CurveKind, Point, Scalar};
use std::hint::black_box;

fn test_scalar(curve: &Curve) -> Scalar {
    curve.scalar_field().decode_reduce(&hex!(
        "aa5e28d6a97a2479a65527f7290311a3624d4cc0fa1578598ee3c2613bf99522"
    ))
}

fn test_point(curve: &'static Curve) -> Point {
    curve.mul_generator(&test_scalar(curve)).unwrap()
}

fn bench_point_add<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, curve: &'static Curve) {
    let p = test_point(curve);
    let g = curve.generator();
    group.bench_function("add", |b| b.iter(|| black_box(&p).add(black_box(&g))));
}

fn bench_point_xdouble<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, curve: &'static Curve) {
    let p = test_point(curve);
    group.bench_function("double", |b| b.iter(|| black_box(&p).double()));
    group.bench_function("xdouble(5)", |b| b.iter(|| black_box(&p).xdouble(5)));
}

fn bench_point_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, curve: &'static Curve) {
    let p = test_point(curve);
    let k = test_scalar(curve);
    group.bench_function("point-scalar mul", |b| {
        b.iter(|| black_box(&p).mul(black_box(&k)))
    });
}

fn bench_point_codec<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, curve: &'static Curve) {
    let p = test_point(curve);
    let bytes = p.to_bytes();
    group.bench_function("encode", |b| b.iter(|| black_box(&p).to_bytes()));
    group.bench_function("decode", |b| {
        b.iter(|| Point::decode(curve, black_box(&bytes)))
    });
}

fn bench_point_map<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, curve: &'static Curve) {
    let bytes = hex!("c3f1a7be2109d4786f0e5d3c2b1a09f8e7d6c5b4a39281706f5e4d3c2b1a0908");
    group.bench_function("map_to_curve", |b| {
        b.iter(|| curve.map_to_curve_bytes(black_box(&bytes)))
    });
}

fn bench_points(c: &mut Criterion) {
    for kind in [CurveKind::Jq255e, CurveKind::Jq255s] {
        let curve = kind.curve();
        let mut group = c.benchmark_group(format!("{} point operations", curve.name()));
        bench_point_add(&mut group, curve);
        bench_point_xdouble(&mut group, curve);
        bench_point_mul(&mut group, curve);
        bench_point_codec(&mut group, curve);
        bench_point_map(&mut group, curve);
        group.finish();
    }
}

criterion_group!(benches, bench_points);
criterion_main!(benches);
