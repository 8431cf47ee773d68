//! The `pipe!` macro: left-to-right pipeline construction.
//!
//! `pipe!` turns an ordered list of unary steps into a single runner
//! closure. Unlike immediate application, the runner can be stored, passed
//! around, and invoked any number of times.

/// Builds a runner that feeds its input through the given steps from left
/// to right.
///
/// `pipe!(f, g, h)` expands to a closure equivalent to `|x| h(g(f(x)))`.
/// The step list is recursed over at expansion time, so there is no upper
/// bound on the number of steps.
///
/// # Syntax
///
/// - `pipe!(f)` - a runner applying the single step: `pipe!(f)(x) == f(x)`
/// - `pipe!(f, g)` - `pipe!(f, g)(x) == g(f(x))`
/// - `pipe!(f, g, h, ...)` - and so on, left to right
///
/// # Type Requirements
///
/// Each step is a unary callable; the runner implements [`Fn`] when every
/// step does, so pipelines built from plain functions and non-consuming
/// closures are freely reusable. A step that consumes its captured
/// environment degrades the runner to [`FnOnce`].
///
/// # Failure Semantics
///
/// The runner introduces nothing of its own: a panicking step unwinds to
/// the runner's caller and the remaining steps never execute.
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use pipelars::pipe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let run = pipe!(add_one, double);
/// assert_eq!(run(3), 8);
/// // The runner is reusable
/// assert_eq!(run(0), 2);
/// ```
///
/// ## Type conversion through a pipeline
///
/// ```
/// use pipelars::pipe;
///
/// let run = pipe!(
///     |x: i32| x + 1,
///     |x: i32| x * 2,
///     |x: i32| format!("n:{x}"),
/// );
/// assert_eq!(run(3), "n:8");
/// ```
///
/// ## Single step
///
/// ```
/// use pipelars::pipe;
///
/// let double = |x: i32| x * 2;
/// assert_eq!(pipe!(double)(21), 42);
/// ```
///
/// ## Duality with compose
///
/// ```
/// use pipelars::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(pipe!(f, g)(10), compose!(g, f)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    // Single step: wrap it so pipe!(f)(x) == f(x) holds for any callable
    ($step:expr $(,)?) => {{
        let step = $step;
        move |input| step(input)
    }};

    // Multiple steps: apply the first, then the runner over the rest
    ($step:expr, $($remaining_steps:expr),+ $(,)?) => {{
        let step = $step;
        let rest = $crate::pipe!($($remaining_steps),+);
        move |input| rest(step(input))
    }};
}
