//! The short-circuit marker: a deferred, unexecuted computation.
//!
//! A [`SideEffect`] is the value a pipeline step returns when it wants to
//! abort the pipeline *without* panicking. The wrapped computation is a
//! description of work, not the work itself: the short-circuiting
//! composers recognize a marker and forward it untouched, and only an
//! explicit consumer call ([`SideEffect::run`], or
//! [`PipeResult::run`](crate::effect::PipeResult::run) /
//! [`PipeResult::fold`](crate::effect::PipeResult::fold)) executes it.
//!
//! # Deferral
//!
//! ```rust
//! use pipelars::effect::SideEffect;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! let executed = Arc::new(AtomicBool::new(false));
//! let executed_clone = Arc::clone(&executed);
//!
//! let marker = SideEffect::new(move || {
//!     executed_clone.store(true, Ordering::SeqCst);
//!     42
//! });
//!
//! // Construction executes nothing
//! assert!(!executed.load(Ordering::SeqCst));
//!
//! // Only the explicit run does
//! assert_eq!(marker.run(), 42);
//! assert!(executed.load(Ordering::SeqCst));
//! ```

use std::fmt;

use static_assertions::assert_impl_all;

/// A deferred computation signalling early pipeline termination.
///
/// `SideEffect<A>` wraps a zero-argument computation producing an `A`,
/// plus an optional descriptive label. Construction never invokes the
/// computation; `run` consumes the marker, so it can execute at most once.
///
/// The thunk is `Send` so markers can cross await points of the
/// asynchronous composers on multi-threaded executors.
///
/// # Examples
///
/// ```rust
/// use pipelars::effect::SideEffect;
///
/// let marker = SideEffect::with_label(|| "stopped", "validation");
/// assert_eq!(marker.label(), Some("validation"));
/// assert_eq!(marker.run(), "stopped");
/// ```
pub struct SideEffect<A> {
    /// The wrapped computation; executed only by `run`.
    effect: Box<dyn FnOnce() -> A + Send>,
    label: Option<String>,
}

assert_impl_all!(SideEffect<i32>: Send);

impl<A: 'static> SideEffect<A> {
    /// Creates a marker around the given computation.
    ///
    /// The computation will not be executed until [`run`](Self::run) is
    /// called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipelars::effect::SideEffect;
    ///
    /// let marker = SideEffect::new(|| "aborted");
    /// assert_eq!(marker.run(), "aborted");
    /// ```
    pub fn new<F>(effect: F) -> Self
    where
        F: FnOnce() -> A + Send + 'static,
    {
        Self {
            effect: Box::new(effect),
            label: None,
        }
    }

    /// Creates a labelled marker.
    ///
    /// The label is purely descriptive — it identifies which step aborted
    /// when a marker surfaces far from its origin.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipelars::effect::SideEffect;
    ///
    /// let marker = SideEffect::with_label(|| 0, "quota-exceeded");
    /// assert_eq!(marker.label(), Some("quota-exceeded"));
    /// ```
    pub fn with_label<F>(effect: F, label: impl Into<String>) -> Self
    where
        F: FnOnce() -> A + Send + 'static,
    {
        Self {
            effect: Box::new(effect),
            label: Some(label.into()),
        }
    }

    /// The descriptive label, if one was attached.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Executes the wrapped computation and returns its result.
    ///
    /// This is the only way the computation ever runs. Consuming `self`
    /// makes a second execution unrepresentable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipelars::effect::SideEffect;
    ///
    /// let marker = SideEffect::new(|| 21 * 2);
    /// assert_eq!(marker.run(), 42);
    /// ```
    pub fn run(self) -> A {
        (self.effect)()
    }

    /// Transforms the eventual result of the computation without running
    /// it.
    ///
    /// The label is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipelars::effect::SideEffect;
    ///
    /// let marker = SideEffect::new(|| 21).fmap(|x| x * 2);
    /// assert_eq!(marker.run(), 42);
    /// ```
    pub fn fmap<B, F>(self, function: F) -> SideEffect<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: 'static,
    {
        let effect = self.effect;
        SideEffect {
            effect: Box::new(move || function(effect())),
            label: self.label,
        }
    }
}

impl<A> fmt::Debug for SideEffect<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SideEffect")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl<A> fmt::Display for SideEffect<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(formatter, "<SideEffect {label}>"),
            None => write!(formatter, "<SideEffect>"),
        }
    }
}
