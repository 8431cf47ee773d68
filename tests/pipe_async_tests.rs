#![cfg(feature = "async")]
//! Integration tests for the asynchronous pure composer.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pipelars::pipe_async;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn async_runner_composes_left_to_right() {
    let run = pipe_async!(
        => |x: i32| x + 1,
        =>> |x: i32| async move { x * 2 },
        => |x: i32| x - 3,
    );
    assert_eq!(run(5).await, 9);
}

#[rstest]
#[tokio::test]
async fn async_runner_awaits_each_step_before_the_next() {
    let sequence = Arc::new(AtomicUsize::new(0));
    let first = Arc::clone(&sequence);
    let second = Arc::clone(&sequence);

    let run = pipe_async!(
        =>> move |x: i32| {
            let sequence = Arc::clone(&first);
            async move {
                tokio::task::yield_now().await;
                assert_eq!(sequence.fetch_add(1, Ordering::SeqCst), 0);
                x + 1
            }
        },
        =>> move |x: i32| {
            let sequence = Arc::clone(&second);
            async move {
                assert_eq!(sequence.fetch_add(1, Ordering::SeqCst), 1);
                x * 2
            }
        },
    );

    assert_eq!(run(1).await, 4);
    assert_eq!(sequence.load(Ordering::SeqCst), 2);
}

#[rstest]
#[tokio::test]
async fn async_runner_performs_no_work_until_awaited() {
    let invocations = Arc::new(AtomicUsize::new(0));
    let probe = Arc::clone(&invocations);

    let run = pipe_async!(
        =>> move |x: i32| {
            let probe = Arc::clone(&probe);
            async move {
                probe.fetch_add(1, Ordering::SeqCst);
                x
            }
        },
    );

    let pending = run(1);
    assert_eq!(invocations.load(Ordering::SeqCst), 0);

    pending.await;
    assert_eq!(invocations.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn async_runner_is_reusable() {
    let run = pipe_async!(
        => |x: i32| x + 1,
        =>> |x: i32| async move { x.to_string() },
    );
    assert_eq!(run(1).await, "2");
    assert_eq!(run(41).await, "42");
}

#[rstest]
#[tokio::test]
#[should_panic(expected = "async step exploded")]
async fn async_panics_propagate_unchanged() {
    let run = pipe_async!(
        => |x: i32| x + 1,
        =>> |_: i32| async move { panic!("async step exploded") },
        => |x: i32| x + 1,
    );
    run(1).await;
}
