//! Benchmark for PersistentTrie vs standard BTreeMap.
//!
//! Compares the performance of snaptrie's PersistentTrie against Rust's standard BTreeMap
//! keyed by strings, and measures the cost of keeping an old snapshot alive.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use snaptrie::persistent::PersistentTrie;
use std::collections::BTreeMap;
use std::hint::black_box;

fn keys(size: usize) -> Vec<String> {
    (0..size).map(|index| format!("key/{index:08}")).collect()
}

// =============================================================================
// put Benchmark
// =============================================================================

fn benchmark_put(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("put");

    for size in [100, 1000, 10000] {
        let keys = keys(size);

        // PersistentTrie put
        group.bench_with_input(
            BenchmarkId::new("PersistentTrie", size),
            &keys,
            |bencher, keys| {
                bencher.iter(|| {
                    let mut trie = PersistentTrie::new();
                    for (index, key) in keys.iter().enumerate() {
                        trie = trie.put(black_box(key), black_box(index));
                    }
                    black_box(trie)
                });
            },
        );

        // Standard BTreeMap insert
        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut map = BTreeMap::new();
                for (index, key) in keys.iter().enumerate() {
                    map.insert(black_box(key.clone()), black_box(index));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1000, 10000] {
        let keys = keys(size);
        let trie: PersistentTrie = keys
            .iter()
            .enumerate()
            .map(|(index, key)| (key.clone(), index))
            .collect();
        let standard_map: BTreeMap<String, usize> = keys
            .iter()
            .enumerate()
            .map(|(index, key)| (key.clone(), index))
            .collect();

        // PersistentTrie get
        group.bench_with_input(
            BenchmarkId::new("PersistentTrie", size),
            &keys,
            |bencher, keys| {
                bencher.iter(|| {
                    let mut sum = 0;
                    for key in keys {
                        if let Some(&value) = trie.get::<usize>(black_box(key)) {
                            sum += value;
                        }
                    }
                    black_box(sum)
                });
            },
        );

        // Standard BTreeMap get
        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut sum = 0;
                for key in keys {
                    if let Some(&value) = standard_map.get(black_box(key)) {
                        sum += value;
                    }
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// remove Benchmark
// =============================================================================

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in [100, 1000, 10000] {
        let keys = keys(size);
        let trie: PersistentTrie = keys
            .iter()
            .enumerate()
            .map(|(index, key)| (key.clone(), index))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("PersistentTrie", size),
            &keys,
            |bencher, keys| {
                bencher.iter(|| {
                    let mut current = trie.clone();
                    for key in keys {
                        current = current.remove(black_box(key));
                    }
                    black_box(current)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// snapshot Benchmark
// =============================================================================

/// Derives a new version from a large trie while the old one stays readable.
fn benchmark_snapshot_update(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("snapshot_update");

    for size in [1000, 10000, 100_000] {
        let keys = keys(size);
        let trie: PersistentTrie = keys
            .iter()
            .enumerate()
            .map(|(index, key)| (key.clone(), index))
            .collect();
        let middle = &keys[size / 2];

        group.bench_with_input(
            BenchmarkId::new("PersistentTrie", size),
            middle,
            |bencher, key| {
                bencher.iter(|| {
                    let updated = trie.put(black_box(key), black_box(usize::MAX));
                    black_box((trie.get::<usize>(key), updated))
                });
            },
        );

        // BTreeMap needs a full clone to keep the old version
        let standard_map: BTreeMap<String, usize> = keys
            .iter()
            .enumerate()
            .map(|(index, key)| (key.clone(), index))
            .collect();
        group.bench_with_input(BenchmarkId::new("BTreeMap", size), middle, |bencher, key| {
            bencher.iter(|| {
                let mut updated = standard_map.clone();
                updated.insert(black_box(key.clone()), black_box(usize::MAX));
                black_box((standard_map.get(key), updated))
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_put,
    benchmark_get,
    benchmark_remove,
    benchmark_snapshot_update
);

criterion_main!(benches);
