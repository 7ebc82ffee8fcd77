// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Performance Benchmarks for Contract Checks
//!
//! Run with: cargo bench -p contract-core

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Record {
    id: u64,
    name: String,
    tags: Vec<String>,
    weights: Vec<f64>,
}

impl Record {
    fn sample(tags: usize) -> Self {
        Self {
            id: 42,
            name: "benchmark-record".to_string(),
            tags: (0..tags).map(|i| format!("tag-{i}")).collect(),
            weights: (0..tags).map(|i| i as f64 * 0.5).collect(),
        }
    }
}

// =============================================================================
// SERIALIZATION BENCHMARKS
// =============================================================================

fn bench_round_trip(c: &mut Criterion) {
    use contract_core::{check_round_trip, Format};

    let mut group = c.benchmark_group("round_trip");

    let small = Record::sample(4);
    let large = Record::sample(1024);

    for format in Format::ALL {
        group.bench_function(format!("{format}_small"), |b| {
            b.iter(|| check_round_trip(black_box(&small), format))
        });
        group.bench_function(format!("{format}_large"), |b| {
            b.iter(|| check_round_trip(black_box(&large), format))
        });
    }

    group.finish();
}

// =============================================================================
// EQUALITY BENCHMARKS
// =============================================================================

fn bench_equality(c: &mut Criterion) {
    use contract_core::EqualityContract;

    let mut group = c.benchmark_group("equality");

    let contract = EqualityContract::new(|| Record::sample(16))
        .with_mutation("id", |r: &mut Record| r.id += 1)
        .with_mutation("name", |r: &mut Record| r.name.push('!'))
        .with_mutation("tags", |r: &mut Record| r.tags.clear());

    group.bench_function("check_all_three_mutations", |b| {
        b.iter(|| contract.check_all())
    });

    group.finish();
}

// =============================================================================
// CURSOR BENCHMARKS
// =============================================================================

fn bench_cursor_walk(c: &mut Criterion) {
    use contract_core::{check_forward_backward, check_random_walk, FilterCursor, SliceCursor};

    let items: Vec<i64> = (0..10_000).collect();
    let evens: Vec<i64> = items.iter().copied().filter(|n| n % 2 == 0).collect();

    let mut group = c.benchmark_group("cursor");
    group.throughput(Throughput::Elements(items.len() as u64));

    group.bench_function("slice_forward_backward_10k", |b| {
        b.iter(|| check_forward_backward(&mut SliceCursor::new(black_box(&items)), &items))
    });

    group.bench_function("filter_forward_backward_10k", |b| {
        b.iter(|| {
            let mut cursor = FilterCursor::new(SliceCursor::new(black_box(&items)), |n: &i64| {
                n % 2 == 0
            });
            check_forward_backward(&mut cursor, &evens)
        })
    });

    group.bench_function("filter_random_walk_1k_steps", |b| {
        b.iter(|| {
            let mut subject =
                FilterCursor::new(SliceCursor::new(&items), |n: &i64| n % 2 == 0);
            let mut reference = SliceCursor::new(&evens);
            check_random_walk(&mut subject, &mut reference, 1_000, black_box(7))
        })
    });

    group.finish();
}

// =============================================================================
// READER BENCHMARKS
// =============================================================================

fn bench_multi_reader(c: &mut Criterion) {
    use contract_core::{check_concatenation, MultiReader};

    let parts: Vec<Vec<u8>> = (0..16).map(|i| vec![i as u8; 4096]).collect();
    let slices: Vec<&[u8]> = parts.iter().map(Vec::as_slice).collect();

    let mut group = c.benchmark_group("multi_reader");
    group.throughput(Throughput::Bytes(16 * 4096));

    group.bench_function("concatenate_64KB", |b| {
        b.iter(|| {
            check_concatenation(
                || MultiReader::from_parts(parts.clone()),
                black_box(&slices),
                &[1024, 8192],
            )
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_round_trip,
    bench_equality,
    bench_cursor_walk,
    bench_multi_reader
);
criterion_main!(benches);
