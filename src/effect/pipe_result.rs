//! The pipeline state type: a value, or a short-circuit marker.
//!
//! `PipeResult<T, E>` is a two-constructor sum type — [`Value`] carries the
//! pipeline's current value, [`Effect`] carries a [`SideEffect`] marker.
//! The short-circuiting composers chain [`fmap`]/[`flat_map`] over it, so
//! the marker check happens before every step by construction, and
//! pattern matching on the result is exhaustive.
//!
//! [`Value`]: PipeResult::Value
//! [`Effect`]: PipeResult::Effect
//! [`fmap`]: PipeResult::fmap
//! [`flat_map`]: PipeResult::flat_map
//!
//! # Examples
//!
//! ```rust
//! use pipelars::effect::PipeResult;
//!
//! let completed: PipeResult<i32, &str> = PipeResult::Value(41).fmap(|x| x + 1);
//! assert_eq!(completed.value(), Some(42));
//!
//! let halted: PipeResult<i32, &str> =
//!     PipeResult::Value(41).flat_map(|_| PipeResult::halt(|| "stopped"));
//! assert!(halted.is_effect());
//! ```
//!
//! # Laws
//!
//! `PipeResult` satisfies the functor and monad laws on its `Value` side:
//!
//! - Identity: `result.fmap(|x| x)` leaves the result unchanged
//! - Composition: `result.fmap(f).fmap(g) == result.fmap(|x| g(f(x)))`
//! - Left identity: `PipeResult::Value(a).flat_map(f) == f(a)`
//! - Short-circuit absorption: an `Effect` passes through `fmap` and
//!   `flat_map` untouched, and the wrapped computation is never invoked
//!   in transit.

use std::fmt;

use crate::effect::SideEffect;

/// The outcome flowing through a short-circuiting pipeline.
///
/// # Type Parameters
///
/// - `T`: the value type at this point of the pipeline
/// - `E`: the short-circuit payload type — what the marker's deferred
///   computation produces when a consumer eventually runs it. One
///   pipeline has one payload type; enumerate heterogeneous payloads with
///   an `enum` to track the exact set of possible shapes.
///
/// # Examples
///
/// ```rust
/// use pipelars::effect::PipeResult;
///
/// fn clamp(x: i32) -> PipeResult<i32, String> {
///     if x > 100 {
///         PipeResult::halt(move || format!("{x} is out of range"))
///     } else {
///         PipeResult::Value(x)
///     }
/// }
///
/// assert!(clamp(7).is_value());
/// assert!(clamp(700).is_effect());
/// ```
pub enum PipeResult<T, E> {
    /// The pipeline is running (or done): a plain value.
    Value(T),
    /// The pipeline short-circuited: an unexecuted marker.
    Effect(SideEffect<E>),
}

impl<T, E> PipeResult<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a short-circuit result around a deferred computation.
    ///
    /// Shorthand for `PipeResult::Effect(SideEffect::new(effect))`; the
    /// computation is not executed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipelars::effect::PipeResult;
    ///
    /// let halted: PipeResult<i32, &str> = PipeResult::halt(|| "stopped");
    /// assert!(halted.is_effect());
    /// ```
    pub fn halt<F>(effect: F) -> Self
    where
        F: FnOnce() -> E + Send + 'static,
        E: 'static,
    {
        Self::Effect(SideEffect::new(effect))
    }

    /// Creates a labelled short-circuit result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipelars::effect::PipeResult;
    ///
    /// let halted: PipeResult<i32, i32> = PipeResult::halt_with_label(|| -1, "overflow");
    /// assert_eq!(halted.effect().and_then(|e| e.label().map(str::to_owned)), Some("overflow".to_owned()));
    /// ```
    pub fn halt_with_label<F>(effect: F, label: impl Into<String>) -> Self
    where
        F: FnOnce() -> E + Send + 'static,
        E: 'static,
    {
        Self::Effect(SideEffect::with_label(effect, label))
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a plain value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipelars::effect::PipeResult;
    ///
    /// let value: PipeResult<i32, &str> = PipeResult::Value(42);
    /// assert!(value.is_value());
    /// ```
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if this is a short-circuit marker.
    ///
    /// This is the capability check consumers branch on before touching
    /// the non-marker path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipelars::effect::PipeResult;
    ///
    /// let halted: PipeResult<i32, &str> = PipeResult::halt(|| "stopped");
    /// assert!(halted.is_effect());
    /// assert!(!halted.is_value());
    /// ```
    #[inline]
    pub const fn is_effect(&self) -> bool {
        matches!(self, Self::Effect(_))
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Converts into `Option<T>`, consuming the result.
    ///
    /// Returns `Some(value)` for `Value`, otherwise `None` — the marker is
    /// dropped without being executed.
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Effect(_) => None,
        }
    }

    /// Converts into `Option<SideEffect<E>>`, consuming the result.
    ///
    /// Returns `Some(marker)` for `Effect`, otherwise `None`. The marker
    /// is handed over unexecuted.
    #[inline]
    pub fn effect(self) -> Option<SideEffect<E>> {
        match self {
            Self::Value(_) => None,
            Self::Effect(effect) => Some(effect),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies a step to the value; forwards a marker untouched.
    ///
    /// This is how the short-circuiting composers lift infallible steps:
    /// the marker check happens here, before the step is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipelars::effect::PipeResult;
    ///
    /// let result: PipeResult<i32, &str> = PipeResult::Value(20).fmap(|x| x * 2);
    /// assert_eq!(result.value(), Some(40));
    ///
    /// let halted: PipeResult<i32, &str> = PipeResult::halt(|| "stopped");
    /// let forwarded = halted.fmap(|x: i32| x * 2); // step never runs
    /// assert!(forwarded.is_effect());
    /// ```
    pub fn fmap<U, F>(self, step: F) -> PipeResult<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Value(value) => PipeResult::Value(step(value)),
            Self::Effect(effect) => PipeResult::Effect(effect),
        }
    }

    /// Applies a marker-capable step to the value; forwards a marker
    /// untouched.
    ///
    /// The step decides between continuing (`Value`) and aborting
    /// (`Effect`). This is the bind of the short-circuit monad.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipelars::effect::PipeResult;
    ///
    /// let result: PipeResult<i32, &str> = PipeResult::Value(5)
    ///     .flat_map(|x| if x > 3 { PipeResult::halt(|| "too big") } else { PipeResult::Value(x) });
    /// assert!(result.is_effect());
    /// ```
    pub fn flat_map<U, F>(self, step: F) -> PipeResult<U, E>
    where
        F: FnOnce(T) -> PipeResult<U, E>,
    {
        match self {
            Self::Value(value) => step(value),
            Self::Effect(effect) => PipeResult::Effect(effect),
        }
    }

    /// Applies an asynchronous marker-capable step; forwards a marker
    /// untouched without polling anything.
    ///
    /// The asynchronous composers await this between steps, which keeps
    /// step execution strictly sequential.
    #[cfg(feature = "async")]
    pub async fn flat_map_async<U, F, Fut>(self, step: F) -> PipeResult<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = PipeResult<U, E>>,
    {
        match self {
            Self::Value(value) => step(value).await,
            Self::Effect(effect) => PipeResult::Effect(effect),
        }
    }

    /// Retargets the marker's eventual payload; a value passes through.
    ///
    /// The payload transformation is itself deferred — nothing runs here.
    pub fn map_effect<D, F>(self, function: F) -> PipeResult<T, D>
    where
        F: FnOnce(E) -> D + Send + 'static,
        E: 'static,
        D: 'static,
    {
        match self {
            Self::Value(value) => PipeResult::Value(value),
            Self::Effect(effect) => PipeResult::Effect(effect.fmap(function)),
        }
    }

    // =========================================================================
    // Consumption
    // =========================================================================

    /// Dispatches on the result: `on_value` for a plain value, `on_effect`
    /// for a marker.
    ///
    /// The marker is handed to `on_effect` unexecuted; whether its
    /// computation runs is the handler's choice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipelars::effect::PipeResult;
    ///
    /// let completed: PipeResult<i32, String> = PipeResult::Value(42);
    /// let rendered = completed.fold(|v| v.to_string(), |effect| effect.run());
    /// assert_eq!(rendered, "42");
    ///
    /// let halted: PipeResult<i32, String> = PipeResult::halt(|| "stopped".to_string());
    /// let rendered = halted.fold(|v| v.to_string(), |effect| effect.run());
    /// assert_eq!(rendered, "stopped");
    /// ```
    #[inline]
    pub fn fold<R, V, H>(self, on_value: V, on_effect: H) -> R
    where
        V: FnOnce(T) -> R,
        H: FnOnce(SideEffect<E>) -> R,
    {
        match self {
            Self::Value(value) => on_value(value),
            Self::Effect(effect) => on_effect(effect),
        }
    }
}

impl<T: 'static> PipeResult<T, T> {
    /// The designated exit point: unwraps the value, or executes the
    /// marker's deferred computation and returns its result.
    ///
    /// Meant to be called once, after the pipeline has finished running —
    /// never from inside a step. For pipelines whose marker payload type
    /// differs from the value type, exit through
    /// [`fold`](PipeResult::fold) instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipelars::effect::PipeResult;
    ///
    /// let completed: PipeResult<i32, i32> = PipeResult::Value(42);
    /// assert_eq!(completed.run(), 42);
    ///
    /// let halted: PipeResult<i32, i32> = PipeResult::halt(|| -1);
    /// assert_eq!(halted.run(), -1);
    /// ```
    pub fn run(self) -> T {
        match self {
            Self::Value(value) => value,
            Self::Effect(effect) => effect.run(),
        }
    }
}

impl<T: fmt::Debug, E> fmt::Debug for PipeResult<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => formatter.debug_tuple("Value").field(value).finish(),
            Self::Effect(effect) => formatter.debug_tuple("Effect").field(effect).finish(),
        }
    }
}

// =============================================================================
// IntoPipeResult Trait
// =============================================================================

/// Converts a value into a [`PipeResult`] at the mouth of a
/// short-circuiting pipeline.
///
/// The runners produced by the `pipe_side_effect!` family pass their
/// initial input through this trait, which is what makes the marker check
/// cover the input itself: a `PipeResult` flows in unchanged (so a marker
/// handed to a runner comes straight back out, with no step invoked),
/// while a plain value is lifted to `Value`.
///
/// Implemented for `PipeResult`, the primitive types, and the
/// [`Pure`] wrapper for everything else. A blanket implementation for all
/// types would overlap with the `PipeResult` one, which must stay an
/// identity.
///
/// # Laws
///
/// - Identity: `pipe_result.into_pipe_result()` is `pipe_result`, markers
///   included and unexecuted
/// - Lifting: `value.into_pipe_result()` is `PipeResult::Value(value)`
pub trait IntoPipeResult<E> {
    /// The value type after conversion.
    type Output;

    /// Performs the conversion.
    fn into_pipe_result(self) -> PipeResult<Self::Output, E>;
}

impl<T, E> IntoPipeResult<E> for PipeResult<T, E> {
    type Output = T;

    fn into_pipe_result(self) -> Self {
        self
    }
}

macro_rules! impl_into_pipe_result_for_primitives {
    ($($ty:ty),*) => {
        $(
            impl<E> IntoPipeResult<E> for $ty {
                type Output = $ty;

                fn into_pipe_result(self) -> PipeResult<$ty, E> {
                    PipeResult::Value(self)
                }
            }
        )*
    };
}

impl_into_pipe_result_for_primitives!(
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    bool,
    char,
    (),
    String,
    &'static str
);

// =============================================================================
// Pure<A> Wrapper Type
// =============================================================================

/// Lifts a user-defined type into a short-circuiting pipeline.
///
/// Primitive inputs convert through [`IntoPipeResult`] directly; other
/// types are wrapped: `run(Pure(my_value))`.
///
/// # Examples
///
/// ```rust
/// use pipelars::effect::{IntoPipeResult, PipeResult, Pure};
///
/// struct Payload { size: usize }
///
/// let lifted: PipeResult<Payload, &str> = Pure(Payload { size: 3 }).into_pipe_result();
/// assert_eq!(lifted.value().map(|payload| payload.size), Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pure<A>(pub A);

impl<A> Pure<A> {
    /// Creates a new `Pure` wrapper around the given value.
    ///
    /// Equivalent to `Pure(value)`.
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps and returns the inner value.
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A, E> IntoPipeResult<E> for Pure<A> {
    type Output = A;

    fn into_pipe_result(self) -> PipeResult<A, E> {
        PipeResult::Value(self.0)
    }
}
