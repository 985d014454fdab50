//! Mansion Mystery Benchmarks
//!
//! Benchmarks for the clue registry and the clue table, implemented with
//! the Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use mansion_mystery_lib::data_structures::clue_table::{ClueTable, ClueTableConfig};
use mansion_mystery_lib::data_structures::ClueRegistry;
use mansion_mystery_lib::game::accusation::score;

/// Deterministic, scrambled clue texts so the tree does not degenerate.
fn clues(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("clue {:08x}", (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)))
        .collect()
}

/// Benchmark the clue registry
fn bench_clue_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("clue_registry");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1000, 10_000].iter() {
        let texts = clues(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("insert_if_absent", size), &texts, |b, texts| {
            b.iter(|| {
                let mut registry = ClueRegistry::new();
                for text in texts {
                    registry.insert_if_absent(black_box(text.as_str()));
                }
                registry
            });
        });

        let registry: ClueRegistry = texts.iter().map(String::as_str).collect();
        group.bench_with_input(BenchmarkId::new("in_order", size), &registry, |b, registry| {
            b.iter(|| registry.iter().count());
        });
    }

    group.finish();
}

/// Benchmark the clue table with different bucket counts
fn bench_clue_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("clue_table");
    group.measurement_time(Duration::from_secs(2));

    let texts = clues(1000);
    for buckets in [1, 101, 1009].iter() {
        let config = ClueTableConfig::new().with_bucket_count(*buckets);
        let mut table = ClueTable::with_config(config).expect("non-zero buckets");
        for (i, text) in texts.iter().enumerate() {
            table.insert_or_update(text.as_str(), if i % 2 == 0 { "Mr. Black" } else { "Sr. Green" });
        }

        group.bench_with_input(BenchmarkId::new("lookup", buckets), &table, |b, table| {
            b.iter(|| {
                for text in &texts {
                    black_box(table.lookup(text));
                }
            });
        });

        let registry: ClueRegistry = texts.iter().map(String::as_str).collect();
        group.bench_with_input(BenchmarkId::new("score", buckets), &table, |b, table| {
            b.iter(|| score(&registry, table, black_box("Mr. Black")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_clue_registry, bench_clue_table);
criterion_main!(benches);
