//! Throughput benchmarks for common pipeline shapes.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lazy_sequence::SequenceExt;
use lazy_sequence::source::{iterate, of, of_generator};
use std::hint::black_box;

fn bench_filter_map_limit(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_map_limit");

    for n in [1_000i64, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let pipeline = iterate(0u64, |v| v + 1)
                .filter(|v| v % 3 != 0)
                .map(|v| v * v)
                .limit(n);
            b.iter(|| black_box(pipeline.reduce(0u64, |acc, v| acc.wrapping_add(v))));
        });
    }

    group.finish();
}

fn bench_sorted_distinct(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorted_distinct");

    for n in [256u64, 4_096] {
        let values: Vec<u64> = (0..n).map(|i| (i * 7919) % (n / 4)).collect();
        group.throughput(Throughput::Elements(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            let pipeline = of(values.iter().copied()).distinct().sorted();
            b.iter(|| black_box(pipeline.count()));
        });
    }

    group.finish();
}

fn bench_flat_map(c: &mut Criterion) {
    let pipeline = of_generator(|| 0..1_000u32).flat_map(|n| of([n, n + 1, n + 2]));

    c.bench_function("flat_map_3x1000", |b| {
        b.iter(|| black_box(pipeline.count()));
    });
}

fn bench_short_circuit(c: &mut Criterion) {
    let pipeline = iterate(0u64, |v| v + 1).map(|v| v * 2);

    c.bench_function("any_match_infinite", |b| {
        b.iter(|| black_box(pipeline.any_match(|v| *v >= black_box(10_000))));
    });
}

criterion_group!(
    benches,
    bench_filter_map_limit,
    bench_sorted_distinct,
    bench_flat_map,
    bench_short_circuit
);
criterion_main!(benches);
