//! Criterion benchmarks for the game generator and entropy fallback.
//!
//! Run with: cargo bench -p railsim --bench random_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use railsim::random::{random_bytes_with_fallback_from, InteractiveRandom, NoEntropy, OsEntropy, Randomizer};

fn bench_randomizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("randomizer");

    let mut r = Randomizer::new(42);
    group.bench_function("next", |b| b.iter(|| black_box(r.next())));
    group.bench_function("next_range_100", |b| {
        b.iter(|| black_box(r.next_range(black_box(100))))
    });

    group.finish();
}

fn bench_random_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_bytes_32");

    let mut interactive = InteractiveRandom(Randomizer::new(7));
    let mut buf = [0u8; 32];
    group.bench_function("os", |b| {
        b.iter(|| random_bytes_with_fallback_from(&OsEntropy, black_box(&mut buf), &mut interactive))
    });
    group.bench_function("fallback", |b| {
        b.iter(|| random_bytes_with_fallback_from(&NoEntropy, black_box(&mut buf), &mut interactive))
    });

    group.finish();
}

criterion_group!(benches, bench_randomizer, bench_random_bytes);
criterion_main!(benches);
