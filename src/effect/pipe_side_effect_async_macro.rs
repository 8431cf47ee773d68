//! Asynchronous short-circuiting pipelines.
//!
//! Same composition and marker protocol as
//! [`pipe_side_effect!`](crate::pipe_side_effect), in an asynchronous
//! runner: `=>>` steps return futures that are awaited before the next
//! step runs, so the steps of one invocation execute strictly
//! sequentially. The marker check still happens before every step and
//! before the initial input; forwarding a marker polls nothing.

/// Builds an asynchronous short-circuiting runner.
///
/// Expands to an async closure; invoking the runner performs no work
/// until the returned future is awaited. The final output is the
/// pipeline's `PipeResult<T, E>`.
///
/// # Operators
///
/// - **Lift operator** (`=>`): an immediate infallible step `T -> U`
/// - **Bind operator** (`=>>`): a suspending marker-capable step
///   `T -> impl Future<Output = PipeResult<U, E>>`, awaited via
///   [`flat_map_async`](crate::effect::PipeResult::flat_map_async)
/// - A bare comma-separated step is shorthand for `=>`
///
/// An immediate marker-capable step is written `=>>` with a ready
/// future: `=>> |x| core::future::ready(check(x))`.
///
/// # Examples
///
/// ```rust,ignore
/// use pipelars::effect::PipeResult;
/// use pipelars::pipe_side_effect_async;
///
/// #[tokio::main]
/// async fn main() {
///     let run = pipe_side_effect_async!(
///         => |x: i32| x + 1,
///         =>> |x: i32| async move {
///             if x > 10 {
///                 PipeResult::halt(move || format!("overflow at {x}"))
///             } else {
///                 PipeResult::Value(x * 2)
///             }
///         },
///     );
///
///     assert_eq!(run(3).await.value(), Some(8));
///     assert!(run(100).await.is_effect());
/// }
/// ```
///
/// ## A marker as the initial input
///
/// ```rust,ignore
/// let run = pipe_side_effect_async!(
///     =>> |x: i32| async move { PipeResult::<i32, &str>::Value(x) },
/// );
/// // Comes straight back out; the step is never invoked.
/// let halted = run(PipeResult::halt(|| "early")).await;
/// assert!(halted.is_effect());
/// ```
#[macro_export]
macro_rules! pipe_side_effect_async {
    ($($steps:tt)+) => {
        async move |__pipelars_input| {
            let __pipelars_state =
                $crate::effect::IntoPipeResult::into_pipe_result(__pipelars_input);
            $crate::__pipelars_side_effect_async_chain!(__pipelars_state, $($steps)+)
        }
    };
}

/// The strict flavor of [`pipe_side_effect_async!`].
///
/// Behaviorally identical — see
/// [`pipe_side_effect_strict!`](crate::pipe_side_effect_strict) for why
/// the strict distinction carries no runtime weight here.
#[macro_export]
macro_rules! pipe_side_effect_strict_async {
    ($($steps:tt)+) => {
        $crate::pipe_side_effect_async!($($steps)+)
    };
}

/// Recursive step chaining for [`pipe_side_effect_async!`]. Not public API.
#[doc(hidden)]
#[macro_export]
macro_rules! __pipelars_side_effect_async_chain {
    // Bind operator, terminal
    ($state:expr, =>> $step:expr $(,)?) => {
        ($state).flat_map_async($step).await
    };

    // Bind operator, continuation
    ($state:expr, =>> $step:expr, $($rest:tt)+) => {
        $crate::__pipelars_side_effect_async_chain!(
            ($state).flat_map_async($step).await,
            $($rest)+
        )
    };

    // Lift operator, terminal
    ($state:expr, => $step:expr $(,)?) => {
        ($state).fmap($step)
    };

    // Lift operator, continuation
    ($state:expr, => $step:expr, $($rest:tt)+) => {
        $crate::__pipelars_side_effect_async_chain!(($state).fmap($step), $($rest)+)
    };

    // Comma shorthand (implicit lift), terminal
    ($state:expr, $step:expr $(,)?) => {
        ($state).fmap($step)
    };

    // Comma shorthand (implicit lift), continuation
    ($state:expr, $step:expr, $($rest:tt)+) => {
        $crate::__pipelars_side_effect_async_chain!(($state).fmap($step), $($rest)+)
    };
}
