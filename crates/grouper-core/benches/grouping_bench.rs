//! Benchmarks for the grouping engine.
//!
//! Run with: cargo bench --bench grouping_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use grouper_core::{group_by, group_by_with, AnagramEquality};

fn grouping_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_by");

    for size in [1_000usize, 10_000, 100_000] {
        let numbers: Vec<u64> = (0..size as u64).map(|n| n.wrapping_mul(2_654_435_761)).collect();

        group.throughput(Throughput::Elements(size as u64));

        for buckets in [8u64, 1_024] {
            group.bench_with_input(
                BenchmarkId::new(format!("modulo_{}", buckets), size),
                &numbers,
                |b, numbers| b.iter(|| group_by(numbers.iter().copied(), |n| n % buckets)),
            );
        }
    }

    group.finish();
}

fn anagram_benchmark(c: &mut Criterion) {
    let words: Vec<String> = ["listen", "silent", "enlist", "google", "gogole", "inlets", "banana"]
        .iter()
        .cycle()
        .take(10_000)
        .map(|w| format!(" {} ", w))
        .collect();

    c.bench_function("group_by_anagram_10k", |b| {
        b.iter(|| group_by_with(words.iter(), |w| w.trim().to_string(), AnagramEquality))
    });
}

criterion_group!(benches, grouping_benchmark, anagram_benchmark);
criterion_main!(benches);
