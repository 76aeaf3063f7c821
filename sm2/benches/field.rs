//! sm2 `FieldElement` benchmarks

use core::hint::black_box;
use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use hex_literal::hex;
use sm2::FieldElement;

const FE_A: [u8; 32] = hex!("32C4AE2C1F1981195F9904466A39C9948FE30BBFF2660BE1715A4589334C74C7");
const FE_B: [u8; 32] = hex!("BC3736A2F4F6779C59BDCEE36B692153D0A9877CC62A474002DF32E52139F0A0");

fn field_elements() -> (FieldElement, FieldElement) {
    (
        FieldElement::from_be_bytes(&FE_A).unwrap(),
        FieldElement::from_be_bytes(&FE_B).unwrap(),
    )
}

fn bench_add<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let (x, y) = black_box(field_elements());
    group.bench_function("add", |b| b.iter(|| &x + &y));
}

fn bench_sub<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let (x, y) = black_box(field_elements());
    group.bench_function("sub", |b| b.iter(|| &x - &y));
}

fn bench_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let (x, y) = black_box(field_elements());
    group.bench_function("mul", |b| b.iter(|| &x * &y));
}

fn bench_square<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let (x, _) = black_box(field_elements());
    group.bench_function("square", |b| b.iter(|| x.square()));
}

fn bench_half<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let (x, _) = black_box(field_elements());
    group.bench_function("half", |b| b.iter(|| x.half()));
}

fn bench_invert<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let (x, _) = black_box(field_elements());
    group.bench_function("invert", |b| b.iter(|| x.invert()));
}

fn bench_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("FieldElement");
    bench_add(&mut group);
    bench_sub(&mut group);
    bench_mul(&mut group);
    bench_square(&mut group);
    bench_half(&mut group);
    bench_invert(&mut group);
    group.finish();
}

criterion_group!(benches, bench_field);
criterion_main!(benches);
