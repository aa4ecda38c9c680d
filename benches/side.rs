//! Benchmarks for the level index.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run one group
//! cargo bench -- side_operations
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main,
    BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::time::Duration;

use levelbook::{Book, BookSide, LevelTree, Order};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// HELPER FUNCTIONS - Deterministic book construction
// ============================================================================

/// Put `count` orders on a side, `per_level` orders per price.
///
/// Order ids are `o0`, `o1`, ... in put order.
fn populate(side: &mut LevelTree, count: usize, per_level: usize, base_price: u64) {
    for i in 0..count {
        let price = base_price + (i / per_level) as u64;
        side.put(Order::new(format!("o{i}"), 100, i as u64), price);
    }
}

/// Seeded (price, quantity) feed around a base price
fn generate_feed(count: usize, seed: u64) -> Vec<(Order, u64)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let price = 50_000 + rng.gen_range(0..1_000u64);
            let quantity = rng.gen_range(1..=1_000u64);
            (Order::new(format!("f{i}"), quantity, i as u64), price)
        })
        .collect()
}

// ============================================================================
// BENCHMARK: Side Operations
// ============================================================================

fn bench_side_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("side_operations");

    group.measurement_time(Duration::from_secs(5));

    group.bench_function("put_to_empty", |b| {
        b.iter_batched(
            LevelTree::new,
            |mut side| {
                side.put(Order::new("A", 100, 0), 50_000);
                black_box(side)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("put_to_10k_side", |b| {
        let mut side = LevelTree::with_capacity(20_000);
        populate(&mut side, 10_000, 10, 50_000);

        b.iter_batched(
            || side.clone(),
            |mut side| {
                side.put(Order::new("new", 100, 0), 50_500);
                black_box(side)
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("remove_from_10k_side", |b| {
        let mut side = LevelTree::with_capacity(20_000);
        populate(&mut side, 10_000, 10, 50_000);

        b.iter_batched(
            || side.clone(),
            |mut side| {
                // Middle of a level, middle of the tree
                black_box(side.remove("o5005").is_ok());
                side
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("modify_in_10k_side", |b| {
        let mut side = LevelTree::with_capacity(20_000);
        populate(&mut side, 10_000, 10, 50_000);
        let price = side.price_of("o5005").unwrap_or_default();
        let mut quantity = 0u64;

        b.iter(|| {
            quantity += 1;
            black_box(side.modify(Order::new("o5005", quantity, 0), price).is_ok())
        });
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Top of Book
// ============================================================================

fn bench_top_of_book(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_of_book");

    for levels in [100usize, 10_000, 100_000] {
        let mut book = Book::new();
        for i in 0..levels {
            book.put_bid(Order::new(format!("b{i}"), 1, 0), 40_000 + i as u64);
            book.put_ask(Order::new(format!("a{i}"), 1, 0), 200_000 + i as u64);
        }

        group.bench_with_input(BenchmarkId::new("levels", levels), &book, |b, book| {
            b.iter(|| {
                let bid = book.top_bid().map(|level| level.total());
                let ask = book.top_ask().map(|level| level.total());
                black_box((bid, ask))
            });
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Throughput
// ============================================================================

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    group.measurement_time(Duration::from_secs(10));
    group.sample_size(50);

    for batch_size in [1_000usize, 10_000, 50_000] {
        group.throughput(Throughput::Elements(batch_size as u64 * 2));

        group.bench_with_input(
            BenchmarkId::new("put_then_remove", batch_size),
            &batch_size,
            |b, &size| {
                let feed = generate_feed(size, 42);

                b.iter_batched(
                    || (LevelTree::with_capacity(size), feed.clone()),
                    |(mut side, feed)| {
                        let ids: Vec<String> = feed.iter().map(|(o, _)| o.id.clone()).collect();
                        for (order, price) in feed {
                            side.put(order, price);
                        }
                        for id in &ids {
                            black_box(side.remove(id).is_ok());
                        }
                        side.level_count()
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(
    benches,
    bench_side_operations,
    bench_top_of_book,
    bench_throughput
);

criterion_main!(benches);
