//! The `pipe_side_effect!` macro: short-circuiting pipelines.
//!
//! Identical left-to-right composition to [`pipe!`](crate::pipe), except
//! that the current value is checked before *every* step — including the
//! initial input. A [`SideEffect`](crate::effect::SideEffect) marker stops
//! the pipeline on the spot: no further step runs, the marker comes back
//! to the caller untouched, and its deferred computation is not invoked.
//!
//! This is the designated non-panic control-flow channel. A step that
//! wants to abort returns a marker instead of a normal value; a step that
//! panics still unwinds to the caller unchanged — the two channels never
//! convert into each other.

/// Builds a short-circuiting runner over the given steps.
///
/// The runner's input passes through
/// [`IntoPipeResult`](crate::effect::IntoPipeResult): plain primitive
/// values and [`Pure`](crate::effect::Pure)-wrapped values are lifted,
/// while a [`PipeResult`](crate::effect::PipeResult) flows in unchanged —
/// so a marker handed in as the initial input comes straight back out
/// with no step invoked. The runner returns the final
/// `PipeResult<T, E>`; exit through
/// [`run`](crate::effect::PipeResult::run) or
/// [`fold`](crate::effect::PipeResult::fold).
///
/// # Operators
///
/// - **Lift operator** (`=>`): an infallible step `T -> U`, applied with
///   [`fmap`](crate::effect::PipeResult::fmap)
/// - **Bind operator** (`=>>`): a marker-capable step
///   `T -> PipeResult<U, E>`, applied with
///   [`flat_map`](crate::effect::PipeResult::flat_map)
/// - A bare comma-separated step is shorthand for `=>`
///
/// Every `=>>` step of one pipeline shares the same payload type `E`;
/// enumerate heterogeneous payloads with an `enum`. A pipeline with no
/// `=>>` step leaves `E` unconstrained, so annotate the result type at
/// the call site.
///
/// # Examples
///
/// ## A guarded pipeline
///
/// ```rust
/// use pipelars::effect::PipeResult;
/// use pipelars::pipe_side_effect;
///
/// let run = pipe_side_effect!(
///     => |x: i32| x + 1,
///     =>> |x: i32| if x == 0 {
///         PipeResult::halt(|| "division by zero")
///     } else {
///         PipeResult::Value(100 / x)
///     },
///     => |x: i32| x + 3,
/// );
///
/// assert_eq!(run(4).value(), Some(23));
/// assert!(run(-1).is_effect());
/// ```
///
/// ## Steps after a marker never run
///
/// ```rust
/// use pipelars::effect::PipeResult;
/// use pipelars::pipe_side_effect;
///
/// let run = pipe_side_effect!(
///     => |x: i32| x + 1,
///     =>> |_: i32| PipeResult::<i32, _>::halt(|| "stopped"),
///     => |_: i32| -> i32 { unreachable!("short-circuited above") },
/// );
///
/// let halted = run(1);
/// assert!(halted.is_effect());
/// // The payload runs only on explicit consumption:
/// assert_eq!(halted.fold(|_| "", |effect| effect.run()), "stopped");
/// ```
#[macro_export]
macro_rules! pipe_side_effect {
    ($($steps:tt)+) => {
        move |__pipelars_input| {
            let __pipelars_state =
                $crate::effect::IntoPipeResult::into_pipe_result(__pipelars_input);
            $crate::__pipelars_side_effect_chain!(__pipelars_state, $($steps)+)
        }
    };
}

/// The strict flavor of [`pipe_side_effect!`].
///
/// Behaviorally identical to its non-strict counterpart — one runtime
/// engine serves both. The strict name exists for call-surface parity:
/// in this crate the payload parameter `E` of
/// [`PipeResult`](crate::effect::PipeResult) always tracks the exact set
/// of short-circuit payload shapes (spell it as an `enum` of the declared
/// variants), so the bookkeeping the strict flavor exists for is already
/// done by the type system.
#[macro_export]
macro_rules! pipe_side_effect_strict {
    ($($steps:tt)+) => {
        $crate::pipe_side_effect!($($steps)+)
    };
}

/// Recursive step chaining for [`pipe_side_effect!`]. Not public API.
#[doc(hidden)]
#[macro_export]
macro_rules! __pipelars_side_effect_chain {
    // Bind operator, terminal
    ($state:expr, =>> $step:expr $(,)?) => {
        ($state).flat_map($step)
    };

    // Bind operator, continuation
    ($state:expr, =>> $step:expr, $($rest:tt)+) => {
        $crate::__pipelars_side_effect_chain!(($state).flat_map($step), $($rest)+)
    };

    // Lift operator, terminal
    ($state:expr, => $step:expr $(,)?) => {
        ($state).fmap($step)
    };

    // Lift operator, continuation
    ($state:expr, => $step:expr, $($rest:tt)+) => {
        $crate::__pipelars_side_effect_chain!(($state).fmap($step), $($rest)+)
    };

    // Comma shorthand (implicit lift), terminal
    ($state:expr, $step:expr $(,)?) => {
        ($state).fmap($step)
    };

    // Comma shorthand (implicit lift), continuation
    ($state:expr, $step:expr, $($rest:tt)+) => {
        $crate::__pipelars_side_effect_chain!(($state).fmap($step), $($rest)+)
    };
}
