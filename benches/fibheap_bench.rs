//! Criterion benchmarks for the Fibonacci heap
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench fibheap_bench
//!
//! # Only the meld group
//! cargo bench --bench fibheap_bench -- meld
//! ```

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use fibheap::experiment::{cascading_cut_experiment, delete_min_experiment};
use fibheap::{FibonacciHeap, Key, NodeId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::hint::black_box;

const SIZES: [usize; 3] = [1 << 10, 1 << 14, 1 << 17];

fn shuffled_keys(n: usize, seed: u64) -> Vec<Key> {
    let mut keys: Vec<Key> = (0..n as Key).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(seed));
    keys
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for n in SIZES {
        let keys = shuffled_keys(n, 1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let mut heap = FibonacciHeap::new();
                for &key in keys {
                    heap.insert(key);
                }
                black_box(heap.len())
            });
        });
    }
    group.finish();
}

fn bench_delete_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_min");
    for n in SIZES {
        let keys = shuffled_keys(n, 2);
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter_batched(
                || keys.iter().copied().collect::<FibonacciHeap>(),
                |mut heap| {
                    while let Some(key) = heap.delete_min() {
                        black_box(key);
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_decrease_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrease_key");
    for n in SIZES {
        let keys = shuffled_keys(n, 3);
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter_batched(
                || {
                    let mut heap = FibonacciHeap::new();
                    let ids: Vec<NodeId> = keys.iter().map(|&k| heap.insert(k + 1)).collect();
                    heap.insert(0);
                    heap.delete_min();
                    (heap, ids)
                },
                |(mut heap, ids)| {
                    // Each decrease drops below every key so far.
                    for (i, &id) in ids.iter().enumerate() {
                        let key = heap.key(id).unwrap_or(0);
                        let _ = heap.decrease_key(id, key + i as Key);
                    }
                    black_box(heap.total_cuts())
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_meld(c: &mut Criterion) {
    let mut group = c.benchmark_group("meld");
    for n in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let mut heap: FibonacciHeap = (0..n as Key).collect();
                    let other: FibonacciHeap = (n as Key..2 * n as Key).collect();
                    heap.delete_min();
                    (heap, other)
                },
                |(mut heap, other)| {
                    heap.meld(other);
                    heap
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_k_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("k_min");
    let mut heap: FibonacciHeap = shuffled_keys(1 << 17, 4).into_iter().collect();
    heap.delete_min();
    for k in [1usize, 16, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| black_box(heap.k_min(k)));
        });
    }
    group.finish();
}

fn bench_experiments(c: &mut Criterion) {
    let mut group = c.benchmark_group("experiments");
    group.sample_size(10);
    for k in [10u32, 14] {
        group.bench_with_input(BenchmarkId::new("cascading_cut", k), &k, |b, &k| {
            b.iter(|| black_box(cascading_cut_experiment(k)));
        });
    }
    for m in [1usize << 10, 1 << 14] {
        group.bench_with_input(BenchmarkId::new("delete_min", m), &m, |b, &m| {
            b.iter(|| black_box(delete_min_experiment(m)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_delete_min,
    bench_decrease_key,
    bench_meld,
    bench_k_min,
    bench_experiments
);
criterion_main!(benches);
