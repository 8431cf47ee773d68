//! Dependency-injected pipelines.
//!
//! The `pipe_with_deps!` family adapts the underlying composers so every
//! step receives a shared context object as an explicit second argument.
//! The runner is curried: `run(input)` returns a closure expecting the
//! dependency context, and the context is lent (`&deps`) to each step
//! unchanged — the engine only forwards it, ownership stays with the
//! caller for the duration of the invocation.
//!
//! Keeping the context an explicit, uniformly threaded parameter is what
//! keeps individual steps free of hidden or shared state; compare the
//! environment-reading computations of a Reader monad.
//!
//! All ordering, short-circuit, and failure semantics of the wrapped
//! composer apply unmodified.

/// Builds a dependency-threading runner over two-argument steps.
///
/// Each step has the shape `(value, &deps) -> next_value`; the produced
/// runner has the shape `run(input) -> (deps) -> final_value`. With a
/// construction-time initial value — `pipe_with_deps!(seed <expr>; …)` —
/// the input stage is skipped and the runner is `run(deps) -> final_value`
/// directly.
///
/// # Examples
///
/// ## Threading a context
///
/// ```rust
/// use pipelars::pipe_with_deps;
///
/// struct Config {
///     offset: i32,
///     scale: i32,
/// }
///
/// let run = pipe_with_deps!(
///     |x: i32, deps: &Config| x + deps.offset,
///     |x: i32, deps: &Config| x * deps.scale,
/// );
///
/// let deps = Config { offset: 2, scale: 10 };
/// assert_eq!(run(4)(deps), 60);
/// ```
///
/// ## Seeded form
///
/// ```rust
/// use pipelars::pipe_with_deps;
///
/// let run = pipe_with_deps!(seed 4; |x: i32, bonus: &i32| x + bonus);
/// assert_eq!(run(38), 42);
/// ```
#[macro_export]
macro_rules! pipe_with_deps {
    // Initial value supplied at construction time: run(deps) -> result
    (seed $value:expr; $($steps:expr),+ $(,)?) => {{
        let __pipelars_seed = $value;
        move |__pipelars_deps| {
            $crate::__pipelars_with_deps_chain!(__pipelars_seed, __pipelars_deps, $($steps),+)
        }
    }};

    // Curried form: run(input) -> (deps) -> result
    ($($steps:expr),+ $(,)?) => {
        move |__pipelars_input| move |__pipelars_deps| {
            $crate::__pipelars_with_deps_chain!(__pipelars_input, __pipelars_deps, $($steps),+)
        }
    };
}

/// Recursive step chaining for [`pipe_with_deps!`]. Not public API.
#[doc(hidden)]
#[macro_export]
macro_rules! __pipelars_with_deps_chain {
    ($value:expr, $deps:expr, $step:expr $(,)?) => {
        ($step)($value, &$deps)
    };

    ($value:expr, $deps:expr, $step:expr, $($rest:expr),+ $(,)?) => {
        $crate::__pipelars_with_deps_chain!(($step)($value, &$deps), $deps, $($rest),+)
    };
}

/// Builds a short-circuiting dependency-threading runner.
///
/// The [`pipe_side_effect!`](crate::pipe_side_effect) marker protocol over
/// two-argument steps: the current value is checked before every step,
/// a marker is forwarded unexecuted, and the dependency context is lent
/// to the steps that do run.
///
/// # Operators
///
/// - `=>` lifts an infallible step `(T, &D) -> U`
/// - `=>>` binds a marker-capable step `(T, &D) -> PipeResult<U, E>`
/// - a bare comma-separated step is shorthand for `=>`
///
/// # Examples
///
/// ```rust
/// use pipelars::effect::PipeResult;
/// use pipelars::pipe_side_effect_with_deps;
///
/// struct Limits {
///     ceiling: i32,
/// }
///
/// let run = pipe_side_effect_with_deps!(
///     => |x: i32, _: &Limits| x + 1,
///     =>> |x: i32, limits: &Limits| if x > limits.ceiling {
///         PipeResult::halt(move || format!("{x} over the ceiling"))
///     } else {
///         PipeResult::Value(x)
///     },
///     => |x: i32, limits: &Limits| x * limits.ceiling,
/// );
///
/// assert_eq!(run(3)(Limits { ceiling: 10 }).value(), Some(40));
/// assert!(run(100)(Limits { ceiling: 10 }).is_effect());
/// ```
#[macro_export]
macro_rules! pipe_side_effect_with_deps {
    (seed $value:expr; $($steps:tt)+) => {{
        let __pipelars_seed = $value;
        move |__pipelars_deps| {
            let __pipelars_state =
                $crate::effect::IntoPipeResult::into_pipe_result(__pipelars_seed);
            $crate::__pipelars_side_effect_with_deps_chain!(
                __pipelars_state,
                __pipelars_deps,
                $($steps)+
            )
        }
    }};

    ($($steps:tt)+) => {
        move |__pipelars_input| move |__pipelars_deps| {
            let __pipelars_state =
                $crate::effect::IntoPipeResult::into_pipe_result(__pipelars_input);
            $crate::__pipelars_side_effect_with_deps_chain!(
                __pipelars_state,
                __pipelars_deps,
                $($steps)+
            )
        }
    };
}

/// Recursive step chaining for [`pipe_side_effect_with_deps!`]. Not
/// public API.
#[doc(hidden)]
#[macro_export]
macro_rules! __pipelars_side_effect_with_deps_chain {
    // Bind operator, terminal
    ($state:expr, $deps:expr, =>> $step:expr $(,)?) => {
        ($state).flat_map(|__pipelars_value| ($step)(__pipelars_value, &$deps))
    };

    // Bind operator, continuation
    ($state:expr, $deps:expr, =>> $step:expr, $($rest:tt)+) => {
        $crate::__pipelars_side_effect_with_deps_chain!(
            ($state).flat_map(|__pipelars_value| ($step)(__pipelars_value, &$deps)),
            $deps,
            $($rest)+
        )
    };

    // Lift operator, terminal
    ($state:expr, $deps:expr, => $step:expr $(,)?) => {
        ($state).fmap(|__pipelars_value| ($step)(__pipelars_value, &$deps))
    };

    // Lift operator, continuation
    ($state:expr, $deps:expr, => $step:expr, $($rest:tt)+) => {
        $crate::__pipelars_side_effect_with_deps_chain!(
            ($state).fmap(|__pipelars_value| ($step)(__pipelars_value, &$deps)),
            $deps,
            $($rest)+
        )
    };

    // Comma shorthand (implicit lift), terminal
    ($state:expr, $deps:expr, $step:expr $(,)?) => {
        ($state).fmap(|__pipelars_value| ($step)(__pipelars_value, &$deps))
    };

    // Comma shorthand (implicit lift), continuation
    ($state:expr, $deps:expr, $step:expr, $($rest:tt)+) => {
        $crate::__pipelars_side_effect_with_deps_chain!(
            ($state).fmap(|__pipelars_value| ($step)(__pipelars_value, &$deps)),
            $deps,
            $($rest)+
        )
    };
}

/// Builds an asynchronous dependency-threading runner.
///
/// `run(input)` returns an async closure expecting the dependency
/// context; `=>>` steps return futures and are awaited in order.
///
/// # Examples
///
/// ```rust,ignore
/// use pipelars::pipe_with_deps_async;
///
/// struct Remote { base: i32 }
///
/// #[tokio::main]
/// async fn main() {
///     let run = pipe_with_deps_async!(
///         => |x: i32, remote: &Remote| x + remote.base,
///         =>> |x: i32, _: &Remote| async move { x * 2 },
///     );
///     assert_eq!(run(1)(Remote { base: 20 }).await, 42);
/// }
/// ```
#[cfg(feature = "async")]
#[macro_export]
macro_rules! pipe_with_deps_async {
    ($($steps:tt)+) => {
        move |__pipelars_input| async move |__pipelars_deps| {
            $crate::__pipelars_with_deps_async_chain!(
                __pipelars_input,
                __pipelars_deps,
                $($steps)+
            )
        }
    };
}

/// Recursive step chaining for [`pipe_with_deps_async!`]. Not public API.
#[cfg(feature = "async")]
#[doc(hidden)]
#[macro_export]
macro_rules! __pipelars_with_deps_async_chain {
    // Bind operator, terminal
    ($value:expr, $deps:expr, =>> $step:expr $(,)?) => {
        ($step)($value, &$deps).await
    };

    // Bind operator, continuation
    ($value:expr, $deps:expr, =>> $step:expr, $($rest:tt)+) => {
        $crate::__pipelars_with_deps_async_chain!(
            ($step)($value, &$deps).await,
            $deps,
            $($rest)+
        )
    };

    // Lift operator, terminal
    ($value:expr, $deps:expr, => $step:expr $(,)?) => {
        ($step)($value, &$deps)
    };

    // Lift operator, continuation
    ($value:expr, $deps:expr, => $step:expr, $($rest:tt)+) => {
        $crate::__pipelars_with_deps_async_chain!(
            ($step)($value, &$deps),
            $deps,
            $($rest)+
        )
    };

    // Comma shorthand (implicit lift), terminal
    ($value:expr, $deps:expr, $step:expr $(,)?) => {
        ($step)($value, &$deps)
    };

    // Comma shorthand (implicit lift), continuation
    ($value:expr, $deps:expr, $step:expr, $($rest:tt)+) => {
        $crate::__pipelars_with_deps_async_chain!(
            ($step)($value, &$deps),
            $deps,
            $($rest)+
        )
    };
}

/// Builds an asynchronous short-circuiting dependency-threading runner.
///
/// Combines the marker protocol of
/// [`pipe_side_effect_async!`](crate::pipe_side_effect_async) with the
/// context threading of [`pipe_with_deps!`](crate::pipe_with_deps):
/// `=>>` steps have the shape
/// `(T, &D) -> impl Future<Output = PipeResult<U, E>>`.
///
/// # Examples
///
/// ```rust,ignore
/// use pipelars::effect::PipeResult;
/// use pipelars::pipe_side_effect_with_deps_async;
///
/// struct Quota { remaining: i32 }
///
/// #[tokio::main]
/// async fn main() {
///     let run = pipe_side_effect_with_deps_async!(
///         =>> |x: i32, quota: &Quota| {
///             let remaining = quota.remaining;
///             async move {
///                 if x > remaining {
///                     PipeResult::halt(|| "quota exhausted")
///                 } else {
///                     PipeResult::Value(x)
///                 }
///             }
///         },
///         => |x: i32, _: &Quota| x * 2,
///     );
///     assert_eq!(run(5)(Quota { remaining: 10 }).await.value(), Some(10));
/// }
/// ```
#[cfg(feature = "async")]
#[macro_export]
macro_rules! pipe_side_effect_with_deps_async {
    ($($steps:tt)+) => {
        move |__pipelars_input| async move |__pipelars_deps| {
            let __pipelars_state =
                $crate::effect::IntoPipeResult::into_pipe_result(__pipelars_input);
            $crate::__pipelars_side_effect_with_deps_async_chain!(
                __pipelars_state,
                __pipelars_deps,
                $($steps)+
            )
        }
    };
}

/// Recursive step chaining for [`pipe_side_effect_with_deps_async!`].
/// Not public API.
#[cfg(feature = "async")]
#[doc(hidden)]
#[macro_export]
macro_rules! __pipelars_side_effect_with_deps_async_chain {
    // Bind operator, terminal
    ($state:expr, $deps:expr, =>> $step:expr $(,)?) => {
        ($state)
            .flat_map_async(|__pipelars_value| ($step)(__pipelars_value, &$deps))
            .await
    };

    // Bind operator, continuation
    ($state:expr, $deps:expr, =>> $step:expr, $($rest:tt)+) => {
        $crate::__pipelars_side_effect_with_deps_async_chain!(
            ($state)
                .flat_map_async(|__pipelars_value| ($step)(__pipelars_value, &$deps))
                .await,
            $deps,
            $($rest)+
        )
    };

    // Lift operator, terminal
    ($state:expr, $deps:expr, => $step:expr $(,)?) => {
        ($state).fmap(|__pipelars_value| ($step)(__pipelars_value, &$deps))
    };

    // Lift operator, continuation
    ($state:expr, $deps:expr, => $step:expr, $($rest:tt)+) => {
        $crate::__pipelars_side_effect_with_deps_async_chain!(
            ($state).fmap(|__pipelars_value| ($step)(__pipelars_value, &$deps)),
            $deps,
            $($rest)+
        )
    };

    // Comma shorthand (implicit lift), terminal
    ($state:expr, $deps:expr, $step:expr $(,)?) => {
        ($state).fmap(|__pipelars_value| ($step)(__pipelars_value, &$deps))
    };

    // Comma shorthand (implicit lift), continuation
    ($state:expr, $deps:expr, $step:expr, $($rest:tt)+) => {
        $crate::__pipelars_side_effect_with_deps_async_chain!(
            ($state).fmap(|__pipelars_value| ($step)(__pipelars_value, &$deps)),
            $deps,
            $($rest)+
        )
    };
}
