//! Performance benchmarks for the pricing kernel
//!
//! The cost function sits inside every quote iteration, so its cost per
//! call bounds solver latency.

use bookie_lmsr::{LmsrMath, SharesSolver, SolverConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_cost_function(c: &mut Criterion) {
    let two = [10_704_587u64, 8_880_614];
    let six = [10_704_587u64, 8_880_614, 5_000_000, 0, 42_000_000, 7];
    let imbalanced = [1_000_000_000_000u64, 0];

    c.bench_function("cost_two_outcomes", |b| {
        b.iter(|| LmsrMath::cost(10.0, black_box(&two)).unwrap())
    });

    c.bench_function("cost_six_outcomes", |b| {
        b.iter(|| LmsrMath::cost(10.0, black_box(&six)).unwrap())
    });

    c.bench_function("cost_large_imbalance", |b| {
        b.iter(|| LmsrMath::cost(10.0, black_box(&imbalanced)).unwrap())
    });
}

fn bench_prices(c: &mut Criterion) {
    let pool = [10_704_587u64, 8_880_614];

    c.bench_function("prices_two_outcomes", |b| {
        b.iter(|| LmsrMath::prices(10.0, black_box(&pool)).unwrap())
    });
}

fn bench_quote(c: &mut Criterion) {
    let solver = SharesSolver::new(SolverConfig::default());
    let pool = [10_704_587u64, 8_880_614];

    c.bench_function("quote_converging_budget", |b| {
        b.iter(|| solver.quote(10.0, black_box(&pool), 0, 1_184_921).unwrap())
    });

    c.bench_function("buy_preview", |b| {
        b.iter(|| LmsrMath::buy_cost(10.0, black_box(&pool), 0, 2_075_195).unwrap())
    });
}

criterion_group!(benches, bench_cost_function, bench_prices, bench_quote);
criterion_main!(benches);
