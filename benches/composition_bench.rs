//! Benchmark for the composition engine: runners, the short-circuit
//! channel, and currying.
//!
//! Measures the overhead the engine adds over direct function calls.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pipelars::effect::PipeResult;
use pipelars::{curry, pipe, pipe_side_effect};
use std::hint::black_box;

// =============================================================================
// Pure Pipeline Benchmarks
// =============================================================================

fn benchmark_pipe(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pipe");

    group.bench_function("direct_calls_baseline", |bencher| {
        bencher.iter(|| {
            let x = black_box(3_i64);
            black_box((x + 1) * 2 - 3)
        });
    });

    group.bench_function("three_steps", |bencher| {
        let run = pipe!(|x: i64| x + 1, |x: i64| x * 2, |x: i64| x - 3);
        bencher.iter(|| black_box(run(black_box(3))));
    });

    for chain_length in [2_i64, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("iterated_runner", chain_length),
            &chain_length,
            |bencher, &chain_length| {
                let run = pipe!(|x: i64| x + 1, |x: i64| x * 2);
                bencher.iter(|| {
                    let mut value = black_box(1);
                    for _ in 0..chain_length {
                        value = run(value);
                    }
                    black_box(value)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Short-Circuit Benchmarks
// =============================================================================

fn benchmark_pipe_side_effect(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pipe_side_effect");

    group.bench_function("completing_pipeline", |bencher| {
        let run = pipe_side_effect!(
            => |x: i64| x + 1,
            =>> |x: i64| PipeResult::<i64, i64>::Value(x * 2),
            => |x: i64| x - 3,
        );
        bencher.iter(|| black_box(run(black_box(3)).run()));
    });

    group.bench_function("halting_pipeline", |bencher| {
        let run = pipe_side_effect!(
            => |x: i64| x + 1,
            =>> |_: i64| PipeResult::<i64, i64>::halt(|| -1),
            => |x: i64| x - 3,
        );
        bencher.iter(|| black_box(run(black_box(3)).run()));
    });

    group.finish();
}

// =============================================================================
// Curry Benchmarks
// =============================================================================

fn benchmark_curry(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("curry");

    fn add3(a: i64, b: i64, c: i64) -> i64 {
        a + b + c
    }

    group.bench_function("direct_call_baseline", |bencher| {
        bencher.iter(|| black_box(add3(black_box(1), black_box(2), black_box(3))));
    });

    group.bench_function("fully_applied_chain", |bencher| {
        let curried = curry!(add3, 3);
        bencher.iter(|| black_box(curried(black_box(1))(black_box(2))(black_box(3))));
    });

    group.bench_function("reused_partial_application", |bencher| {
        let curried = curry!(add3, 3);
        let partial = curried(1)(2);
        bencher.iter(|| black_box(partial(black_box(3))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_pipe,
    benchmark_pipe_side_effect,
    benchmark_curry
);
criterion_main!(benches);
