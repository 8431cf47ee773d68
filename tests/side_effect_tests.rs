#![cfg(feature = "effect")]
//! Integration tests for the short-circuit marker and its helpers.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pipelars::effect::{IntoPipeResult, PipeResult, Pure, SideEffect};

/// A marker whose executions are counted by the probe.
fn counted_marker(invocations: &Arc<AtomicUsize>) -> SideEffect<&'static str> {
    let probe = Arc::clone(invocations);
    SideEffect::new(move || {
        probe.fetch_add(1, Ordering::SeqCst);
        "stopped"
    })
}

// =============================================================================
// Deferral invariants
// =============================================================================

#[test]
fn construction_never_invokes_the_computation() {
    let invocations = Arc::new(AtomicUsize::new(0));
    let marker = counted_marker(&invocations);

    assert_eq!(invocations.load(Ordering::SeqCst), 0);
    drop(marker);
    assert_eq!(invocations.load(Ordering::SeqCst), 0);
}

#[test]
fn pass_through_helpers_never_invoke_the_computation() {
    let invocations = Arc::new(AtomicUsize::new(0));
    let result = PipeResult::<i32, _>::Effect(counted_marker(&invocations));

    assert!(result.is_effect());
    assert!(!result.is_value());

    let forwarded = result
        .fmap(|x| x + 1)
        .flat_map(|x| PipeResult::Value(x * 2))
        .into_pipe_result();

    assert!(forwarded.is_effect());
    assert_eq!(invocations.load(Ordering::SeqCst), 0);
}

#[test]
fn explicit_run_invokes_exactly_once() {
    let invocations = Arc::new(AtomicUsize::new(0));
    let marker = counted_marker(&invocations);

    assert_eq!(marker.run(), "stopped");
    assert_eq!(invocations.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Exit points
// =============================================================================

#[test]
fn run_returns_a_plain_value_unchanged() {
    let completed: PipeResult<String, String> = PipeResult::Value("done".to_string());
    assert_eq!(completed.run(), "done");
}

#[test]
fn run_executes_a_marker_payload() {
    let halted: PipeResult<String, String> = PipeResult::halt(|| "stopped".to_string());
    assert_eq!(halted.run(), "stopped");
}

#[test]
fn fold_dispatches_without_forcing_execution() {
    let invocations = Arc::new(AtomicUsize::new(0));
    let halted = PipeResult::<i32, _>::Effect(counted_marker(&invocations));

    // The handler can inspect the marker without running it
    let inspected = halted.fold(|_| false, |effect| effect.label().is_none());
    assert!(inspected);
    assert_eq!(invocations.load(Ordering::SeqCst), 0);

    // Or choose to run it
    let completed: PipeResult<i32, &str> = PipeResult::Value(42);
    assert_eq!(completed.fold(|v| v.to_string(), |e| e.run().to_string()), "42");
}

// =============================================================================
// Labels
// =============================================================================

#[test]
fn labels_survive_forwarding() {
    let halted: PipeResult<i32, i32> = PipeResult::halt_with_label(|| -1, "quota");

    let forwarded = halted.fmap(|x| x + 1).fmap(|x| x * 2);
    let marker = forwarded.effect().expect("marker expected");
    assert_eq!(marker.label(), Some("quota"));
}

// =============================================================================
// Lifting
// =============================================================================

#[test]
fn primitives_lift_to_values() {
    let lifted: PipeResult<u64, ()> = 7_u64.into_pipe_result();
    assert_eq!(lifted.value(), Some(7));

    let lifted: PipeResult<char, ()> = 'x'.into_pipe_result();
    assert_eq!(lifted.value(), Some('x'));
}

#[test]
fn pipe_results_lift_to_themselves() {
    let invocations = Arc::new(AtomicUsize::new(0));
    let halted = PipeResult::<i32, _>::Effect(counted_marker(&invocations));

    let converted = halted.into_pipe_result();
    assert!(converted.is_effect());
    assert_eq!(invocations.load(Ordering::SeqCst), 0);
}

#[test]
fn pure_lifts_user_types() {
    struct Order {
        total: u32,
    }

    let lifted: PipeResult<Order, &str> = Pure(Order { total: 12 }).into_pipe_result();
    assert_eq!(lifted.value().map(|order| order.total), Some(12));
}
