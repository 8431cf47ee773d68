//! # pipelars
//!
//! Declarative function-composition pipelines for Rust, with an explicit,
//! exception-free channel for early termination.
//!
//! ## Overview
//!
//! This library coordinates multi-step data transformations — synchronous
//! and asynchronous — without imperative control flow and without abusing
//! panics for short-circuiting. It provides:
//!
//! - **Composition**: `pipe!`, `compose!`, `pipe_async!` build a single
//!   runner out of an ordered list of unary steps
//! - **Currying**: the arity-driven `curry!` macro and positional
//!   `partial!` application
//! - **Short-Circuiting**: the [`effect::SideEffect`] marker and the
//!   `pipe_side_effect!` family, which stop a pipeline the moment a step
//!   returns a marker — without executing the marker's deferred payload
//! - **Dependency Injection**: the `pipe_with_deps!` family threads a
//!   caller-owned context to every step as an explicit second argument
//! - **Timing Adapters**: retry, timeout, debounce and throttle wrappers
//!   that conform to the step contract from the outside
//!
//! ## Feature Flags
//!
//! - `compose`: composition and currying macros
//! - `effect`: the short-circuit marker, `PipeResult`, and the
//!   short-circuiting composers
//! - `async`: asynchronous composer variants (implies `effect`)
//! - `timing`: timer-based step adapters (implies `async`)
//! - `full`: everything
//!
//! ## Example
//!
//! ```rust
//! use pipelars::pipe;
//!
//! let run = pipe!(|x: i32| x + 1, |x: i32| x * 2);
//! assert_eq!(run(3), 8);
//! ```
//!
//! ## Short-Circuiting
//!
//! ```rust
//! use pipelars::effect::PipeResult;
//! use pipelars::pipe_side_effect;
//!
//! let run = pipe_side_effect!(
//!     => |x: i32| x + 1,
//!     =>> |x: i32| if x > 10 {
//!         PipeResult::halt(move || format!("overflow at {x}"))
//!     } else {
//!         PipeResult::Value(x)
//!     },
//!     => |x: i32| x * 2,
//! );
//!
//! assert_eq!(run(3).value(), Some(8));
//!
//! let halted = run(100);
//! assert!(halted.is_effect());
//! assert_eq!(
//!     halted.fold(|value| value.to_string(), |effect| effect.run()),
//!     "overflow at 101",
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use pipelars::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "timing")]
    pub use crate::timing::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "timing")]
pub mod timing;

#[cfg(feature = "compose")]
pub use pipelars_derive::{curry, partial};
