//! The `pipe_async!` macro: asynchronous left-to-right pipelines.
//!
//! The asynchronous runner awaits each suspending step before advancing,
//! so the steps of one invocation always execute strictly sequentially;
//! an awaited future is the pipeline's only suspension point.
//!
//! # Operators
//!
//! Rust cannot unify "returns a value" and "returns a future" behind one
//! closure type, so each step is marked at the call site:
//!
//! - **Lift operator** (`=>`): an immediate step `A -> B`
//! - **Bind operator** (`=>>`): a suspending step `A -> impl Future<Output = B>`,
//!   awaited before the next step runs
//! - A bare comma-separated step is shorthand for `=>`

/// Builds an asynchronous runner that feeds its input through the given
/// steps from left to right, awaiting suspending steps.
///
/// Expands to an async closure: `pipe_async!(=> f, =>> g)` is equivalent
/// to `async move |x| g(f(x)).await`. Invoking the runner performs no
/// work; the work happens when the returned future is awaited.
///
/// # Syntax
///
/// - `pipe_async!(=> f)` - immediate step, applied directly
/// - `pipe_async!(=>> f)` - suspending step, `f(x)` is awaited
/// - `pipe_async!(f)` - shorthand for `=> f`
/// - operators mix freely: `pipe_async!(f, =>> g, => h, ...)`
///
/// # Ordering
///
/// Steps never run concurrently within one invocation: step N receives
/// exactly step N-1's (awaited) output. A panicking step unwinds through
/// the runner's future; later steps never execute.
///
/// # Examples
///
/// ## Mixing immediate and suspending steps
///
/// ```rust,ignore
/// use pipelars::pipe_async;
///
/// #[tokio::main]
/// async fn main() {
///     let run = pipe_async!(
///         => |x: i32| x + 1,
///         =>> |x: i32| async move { x * 2 },
///         => |x: i32| x + 3,
///     );
///     assert_eq!(run(5).await, 15);
/// }
/// ```
///
/// ## Reuse
///
/// ```rust,ignore
/// let run = pipe_async!(=> |x: i32| x * 2);
/// assert_eq!(run(1).await, 2);
/// assert_eq!(run(2).await, 4);
/// ```
#[macro_export]
macro_rules! pipe_async {
    ($($steps:tt)+) => {
        async move |__pipelars_input| {
            $crate::__pipelars_pipe_async_chain!(__pipelars_input, $($steps)+)
        }
    };
}

/// Recursive step chaining for [`pipe_async!`]. Not public API.
#[doc(hidden)]
#[macro_export]
macro_rules! __pipelars_pipe_async_chain {
    // Bind operator, terminal
    ($value:expr, =>> $step:expr $(,)?) => {
        ($step)($value).await
    };

    // Bind operator, continuation
    ($value:expr, =>> $step:expr, $($rest:tt)+) => {
        $crate::__pipelars_pipe_async_chain!(($step)($value).await, $($rest)+)
    };

    // Lift operator, terminal
    ($value:expr, => $step:expr $(,)?) => {
        ($step)($value)
    };

    // Lift operator, continuation
    ($value:expr, => $step:expr, $($rest:tt)+) => {
        $crate::__pipelars_pipe_async_chain!(($step)($value), $($rest)+)
    };

    // Comma shorthand (implicit lift), terminal
    ($value:expr, $step:expr $(,)?) => {
        ($step)($value)
    };

    // Comma shorthand (implicit lift), continuation
    ($value:expr, $step:expr, $($rest:tt)+) => {
        $crate::__pipelars_pipe_async_chain!(($step)($value), $($rest)+)
    };
}
