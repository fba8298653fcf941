//! Fee Aggregation Benchmarks
//!
//! Measures summing and formatting subgraph fee rows, the only
//! non-trivial arithmetic on the fetch path.
//!
//! Run with: cargo bench --bench fees_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chain_metric_adapters::domain::fees::{self, TOKEN_DECIMALS};
use chain_metric_adapters::domain::time::start_of_day_utc;

fn rows(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{}", 1_234_567_890_123_456_789u128 + i as u128 * 7_919))
        .collect()
}

/// Benchmark summing a typical day of fee rows.
fn bench_fee_sum_1k(c: &mut Criterion) {
    let rows = rows(1_000);

    c.bench_function("fee_sum_1k_rows", |b| {
        b.iter(|| {
            let _total =
                fees::total_in_tokens(black_box(rows.iter().map(String::as_str)), TOKEN_DECIMALS);
        });
    });
}

/// Benchmark summing a busy day of fee rows.
fn bench_fee_sum_10k(c: &mut Criterion) {
    let rows = rows(10_000);

    c.bench_function("fee_sum_10k_rows", |b| {
        b.iter(|| {
            let _total =
                fees::total_in_tokens(black_box(rows.iter().map(String::as_str)), TOKEN_DECIMALS);
        });
    });
}

/// Benchmark day alignment.
fn bench_start_of_day(c: &mut Criterion) {
    c.bench_function("start_of_day_utc", |b| {
        b.iter(|| {
            let _day = start_of_day_utc(black_box(1_725_742_786));
        });
    });
}

criterion_group!(
    benches,
    bench_fee_sum_1k,
    bench_fee_sum_10k,
    bench_start_of_day,
);
criterion_main!(benches);
