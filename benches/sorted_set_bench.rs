//! SortedSet bulk mutation benchmark.
//!
//! Compares batched `insert_all` / `remove_all` / `insert_set` against the
//! element-at-a-time baseline, and the linear algebra path against an opaque
//! operand.
//!
//! Inputs are generated once per size and cloned in setup.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use setwise::prelude::*;
use std::hint::black_box;

const SIZES: [u32; 3] = [100, 1000, 10000];

/// Even values `0, 2, ..., 2 * (size - 1)`.
fn evens(size: u32) -> SortedSet<u32> {
    (0..size).map(|value| value * 2).collect()
}

/// Odd values in a scrambled order, so the batch must be sorted first.
fn scrambled_odds(size: u32) -> Vec<u32> {
    (0..size).map(|value| (value * 7919 % size) * 2 + 1).collect()
}

fn batch_size_for(size: u32) -> BatchSize {
    if size < 1000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_set_insert");

    for size in SIZES {
        let base = evens(size);
        let batch = scrambled_odds(size);

        group.bench_with_input(BenchmarkId::new("insert_all", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || (base.clone(), batch.clone()),
                |(mut set, batch)| {
                    set.insert_all(black_box(batch));
                    black_box(set)
                },
                batch_size_for(size),
            );
        });

        group.bench_with_input(
            BenchmarkId::new("insert_each", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || (base.clone(), batch.clone()),
                    |(mut set, batch)| {
                        for value in batch {
                            set.insert(black_box(value));
                        }
                        black_box(set)
                    },
                    batch_size_for(size),
                );
            },
        );

        let other = SortedSet::from_iter(batch.iter().copied());
        group.bench_with_input(BenchmarkId::new("insert_set", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || base.clone(),
                |mut set| {
                    set.insert_set(black_box(&other));
                    black_box(set)
                },
                batch_size_for(size),
            );
        });
    }

    group.finish();
}

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_set_remove");

    for size in SIZES {
        let base = evens(size);
        let doomed: Vec<u32> = (0..size).step_by(2).map(|value| value * 2).collect();

        group.bench_with_input(BenchmarkId::new("remove_all", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || (base.clone(), doomed.clone()),
                |(mut set, doomed)| {
                    set.remove_all(black_box(doomed));
                    black_box(set)
                },
                batch_size_for(size),
            );
        });

        group.bench_with_input(
            BenchmarkId::new("remove_each", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || base.clone(),
                    |mut set| {
                        for value in &doomed {
                            set.remove(black_box(value));
                        }
                        black_box(set)
                    },
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

fn benchmark_algebra(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_set_intersection");

    for size in SIZES {
        let left = evens(size);
        let sorted: SortedSet<u32> = (0..size).map(|value| value * 3).collect();
        let hashed: HashedSet<u32> = sorted.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("sorted", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.intersection(black_box(&sorted))));
        });

        group.bench_with_input(BenchmarkId::new("hashed", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.intersection(black_box(&hashed))));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_insert, benchmark_remove, benchmark_algebra);

criterion_main!(benches);
