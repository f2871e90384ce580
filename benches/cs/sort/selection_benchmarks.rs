use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use linselect::{linear_select, randomized_quickselect, sort_select};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

fn random_data(len: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen()).collect()
}

fn std_select(data: &[u64], rank: usize) -> u64 {
    let mut scratch = data.to_vec();
    *scratch.select_nth_unstable(rank - 1).1
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_random");
    for len in [100usize, 1_000, 10_000, 100_000] {
        let data = random_data(len, len as u64);
        let rank = len / 2 + 1;

        group.bench_with_input(BenchmarkId::new("linear_select", len), &data, |b, data| {
            b.iter(|| black_box(linear_select(black_box(data), rank)))
        });
        group.bench_with_input(
            BenchmarkId::new("randomized_quickselect", len),
            &data,
            |b, data| b.iter(|| black_box(randomized_quickselect(black_box(data), rank))),
        );
        group.bench_with_input(BenchmarkId::new("std_select_nth", len), &data, |b, data| {
            b.iter(|| black_box(std_select(black_box(data), rank)))
        });
        // Quadratic, so only the small sizes.
        if len <= 1_000 {
            group.bench_with_input(BenchmarkId::new("sort_select", len), &data, |b, data| {
                b.iter(|| black_box(sort_select(black_box(data), rank)))
            });
        }
    }
    group.finish();
}

fn bench_patterns(c: &mut Criterion) {
    let len = 10_000;
    let ascending: Vec<u64> = (0..len as u64).collect();
    let descending: Vec<u64> = (0..len as u64).rev().collect();
    let few_unique: Vec<u64> = random_data(len, 42).into_iter().map(|x| x % 64).collect();

    let mut group = c.benchmark_group("select_patterns");
    for (name, data) in [
        ("ascending", &ascending),
        ("descending", &descending),
        ("few_unique", &few_unique),
    ] {
        group.bench_with_input(BenchmarkId::new("linear_select", name), data, |b, data| {
            b.iter(|| black_box(linear_select(black_box(data), len / 2)))
        });
        group.bench_with_input(BenchmarkId::new("std_select_nth", name), data, |b, data| {
            b.iter(|| black_box(std_select(black_box(data), len / 2)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_random, bench_patterns);
criterion_main!(benches);
