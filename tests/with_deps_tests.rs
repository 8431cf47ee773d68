#![cfg(feature = "effect")]
//! Integration tests for the dependency-injected pipeline wrappers.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pipelars::effect::PipeResult;
use pipelars::{pipe_side_effect_with_deps, pipe_with_deps};

/// The dependency context threaded through the pipelines under test.
struct Services {
    offset: i32,
    ceiling: i32,
}

// =============================================================================
// Pure wrapper
// =============================================================================

#[test]
fn every_step_receives_the_same_context() {
    let sightings = Arc::new(AtomicUsize::new(0));
    let first = Arc::clone(&sightings);
    let second = Arc::clone(&sightings);

    let run = pipe_with_deps!(
        move |x: i32, services: &Services| {
            first.fetch_add(1, Ordering::SeqCst);
            x + services.offset
        },
        move |x: i32, services: &Services| {
            second.fetch_add(1, Ordering::SeqCst);
            x * services.ceiling
        },
    );

    let result = run(4)(Services {
        offset: 2,
        ceiling: 10,
    });

    assert_eq!(result, 60);
    assert_eq!(sightings.load(Ordering::SeqCst), 2);
}

#[test]
fn ordering_matches_the_pure_composer() {
    let run = pipe_with_deps!(
        |x: i32, _: &()| x + 1,
        |x: i32, _: &()| x * 2,
        |x: i32, _: &()| x - 3,
    );
    // Same shape as pipe!(…+1, …*2, …-3)
    assert_eq!(run(5)(()), 9);
}

#[test]
fn seeded_runner_takes_only_the_context() {
    let run = pipe_with_deps!(seed 40; |x: i32, services: &Services| x + services.offset);
    let result = run(Services {
        offset: 2,
        ceiling: 0,
    });
    assert_eq!(result, 42);
}

#[test]
fn context_ownership_stays_with_the_caller_until_invocation() {
    // The context is built per invocation; the runner holds nothing
    let run = pipe_with_deps!(|x: i32, bonus: &i32| x + bonus);
    assert_eq!(run(1)(10), 11);
    assert_eq!(run(1)(20), 21);
}

// =============================================================================
// Short-circuiting wrapper
// =============================================================================

#[test]
fn deps_aware_guard_can_halt() {
    let later_invocations = Arc::new(AtomicUsize::new(0));
    let probe = Arc::clone(&later_invocations);

    let run = pipe_side_effect_with_deps!(
        => |x: i32, services: &Services| x + services.offset,
        =>> |x: i32, services: &Services| if x > services.ceiling {
            PipeResult::halt_with_label(move || x, "ceiling")
        } else {
            PipeResult::Value(x)
        },
        => move |x: i32, _: &Services| {
            probe.fetch_add(1, Ordering::SeqCst);
            x * 2
        },
    );

    let halted = run(100)(Services {
        offset: 1,
        ceiling: 10,
    });

    assert!(halted.is_effect());
    assert_eq!(later_invocations.load(Ordering::SeqCst), 0);

    let marker = halted.effect().expect("marker expected");
    assert_eq!(marker.label(), Some("ceiling"));
    assert_eq!(marker.run(), 101);
}

#[test]
fn deps_aware_pipeline_completes_under_the_ceiling() {
    let run = pipe_side_effect_with_deps!(
        => |x: i32, services: &Services| x + services.offset,
        =>> |x: i32, services: &Services| if x > services.ceiling {
            PipeResult::<i32, i32>::halt(move || x)
        } else {
            PipeResult::Value(x)
        },
        => |x: i32, _: &Services| x * 2,
    );

    let completed = run(3)(Services {
        offset: 1,
        ceiling: 10,
    });

    assert_eq!(completed.run(), 8);
}

#[test]
fn deps_aware_seeded_form() {
    let run = pipe_side_effect_with_deps!(
        seed 9;
        =>> |x: i32, services: &Services| if x > services.ceiling {
            PipeResult::<i32, &str>::halt(|| "too big")
        } else {
            PipeResult::Value(x + services.offset)
        },
    );

    let completed = run(Services {
        offset: 1,
        ceiling: 10,
    });
    assert_eq!(completed.value(), Some(10));
}

// =============================================================================
// Asynchronous wrappers
// =============================================================================

#[cfg(feature = "async")]
mod asynchronous {
    use super::Services;
    use pipelars::effect::PipeResult;
    use pipelars::{pipe_side_effect_with_deps_async, pipe_with_deps_async};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn async_steps_see_the_context() {
        let run = pipe_with_deps_async!(
            => |x: i32, services: &Services| x + services.offset,
            =>> |x: i32, services: &Services| {
                let ceiling = services.ceiling;
                async move { x * ceiling }
            },
        );

        let result = run(1)(Services {
            offset: 20,
            ceiling: 2,
        })
        .await;

        assert_eq!(result, 42);
    }

    #[rstest]
    #[tokio::test]
    async fn async_deps_aware_guard_halts() {
        let run = pipe_side_effect_with_deps_async!(
            =>> |x: i32, services: &Services| {
                let ceiling = services.ceiling;
                async move {
                    if x > ceiling {
                        PipeResult::<i32, &str>::halt(|| "over the ceiling")
                    } else {
                        PipeResult::Value(x)
                    }
                }
            },
            => |x: i32, _: &Services| x * 2,
        );

        let completed = run(5)(Services {
            offset: 0,
            ceiling: 10,
        })
        .await;
        assert_eq!(completed.value(), Some(10));

        let halted = run(11)(Services {
            offset: 0,
            ceiling: 10,
        })
        .await;
        assert!(halted.is_effect());
    }
}
