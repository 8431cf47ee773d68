#![cfg(feature = "compose")]
//! Integration tests for `curry!` and `partial!`.

use pipelars::{curry, partial, pipe};
use rstest::rstest;

fn add3(a: i32, b: i32, c: i32) -> i32 {
    a + b + c
}

// =============================================================================
// curry! — one argument at a time
// =============================================================================

#[test]
fn curry_closure_form_reads_the_parameter_count() {
    let add = curry!(|a: i32, b: i32| a + b);
    assert_eq!(add(5)(3), 8);
}

#[test]
fn curry_function_form_takes_explicit_arity() {
    let curried = curry!(add3, 3);
    assert_eq!(curried(1)(2)(3), 6);
}

#[test]
fn curry_closure_and_function_forms_agree() {
    let from_closure = curry!(|a: i32, b: i32, c: i32| add3(a, b, c));
    let from_function = curry!(add3, 3);
    assert_eq!(from_closure(1)(2)(3), from_function(1)(2)(3));
}

#[rstest]
#[case(1, 2, 3)]
#[case(0, 0, 0)]
#[case(-5, 10, -5)]
fn curry_equals_direct_invocation(#[case] a: i32, #[case] b: i32, #[case] c: i32) {
    let curried = curry!(add3, 3);
    assert_eq!(curried(a)(b)(c), add3(a, b, c));
}

#[test]
fn curry_partial_applications_are_reusable() {
    let multiply = curry!(|first: i32, second: i32| first * second);
    let double = multiply(2);

    assert_eq!(double(5), 10);
    assert_eq!(double(7), 14);
    assert_eq!(double(5), 10);
}

#[test]
fn curry_sibling_partials_do_not_interfere() {
    let curried = curry!(add3, 3);
    let with_ten = curried(10);

    // Two partial applications derived from the same prefix
    let with_ten_twenty = with_ten(20);
    let with_ten_thirty = with_ten(30);

    assert_eq!(with_ten_twenty(1), 31);
    assert_eq!(with_ten_thirty(1), 41);
    // The first sibling still sees its own prefix
    assert_eq!(with_ten_twenty(2), 32);
}

#[test]
fn curry_supports_non_copy_arguments() {
    let join = curry!(|prefix: String, suffix: &str| format!("{prefix}{suffix}"));
    let greet = join("hello ".to_string());

    assert_eq!(greet("world"), "hello world");
    assert_eq!(greet("again"), "hello again");
}

#[test]
fn curry_higher_arity() {
    let sum = curry!(|a: i32, b: i32, c: i32, d: i32, e: i32| a + b + c + d + e);
    assert_eq!(sum(1)(2)(3)(4)(5), 15);
}

// =============================================================================
// partial! — any prefix in a single call
// =============================================================================

#[test]
fn partial_fixes_a_prefix() {
    // The (a, b)(c) grouping of the curried call
    let with_one_two = partial!(add3, 1, 2, __);
    assert_eq!(with_one_two(3), 6);
    assert_eq!(with_one_two(10), 13);
}

#[test]
fn partial_agrees_with_curry() {
    let curried = curry!(add3, 3);
    assert_eq!(partial!(add3, 1, 2, __)(3), curried(1)(2)(3));
}

#[test]
fn partial_fixes_arbitrary_positions() {
    fn weight(a: i32, b: i32, c: i32) -> i32 {
        a * 100 + b * 10 + c
    }

    let middle_fixed = partial!(weight, __, 5, __);
    assert_eq!(middle_fixed(1, 2), 152);
}

#[test]
fn partial_all_bound_defers_as_a_thunk() {
    let thunk = partial!(add3, 1, 2, 3);
    assert_eq!(thunk(), 6);
    assert_eq!(thunk(), 6);
}

#[test]
fn partial_clones_bound_values_per_call() {
    fn tag(label: String, value: i32) -> String {
        format!("{label}:{value}")
    }

    let tagged = partial!(tag, "item".to_string(), __);
    assert_eq!(tagged(1), "item:1");
    assert_eq!(tagged(2), "item:2");
}

// =============================================================================
// Currying composes with pipelines
// =============================================================================

#[test]
fn curried_steps_feed_pipelines() {
    let scale = curry!(|factor: i32, value: i32| factor * value);

    let run = pipe!(|x: i32| x + 1, scale(10));
    assert_eq!(run(3), 40);
}
