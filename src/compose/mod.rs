//! Function composition utilities.
//!
//! This module provides the composition half of the toolkit: macros and
//! functions that assemble declarative transformation pipelines out of
//! small unary steps.
//!
//! # Overview
//!
//! - [`pipe!`]: build a left-to-right runner from an ordered step list
//! - [`compose!`]: compose functions right-to-left (mathematical order)
//! - [`pipe_async!`]: asynchronous runner; steps may suspend
//! - [`curry!`](crate::curry): arity-driven currying
//! - [`partial!`](crate::partial): positional partial application
//!
//! # Helper Functions
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: a function that always returns the same value
//! - [`flip`]: swaps the arguments of a binary function
//!
//! # Examples
//!
//! ## Building a runner
//!
//! ```
//! use pipelars::pipe;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // pipe!(f, g) builds |x| g(f(x))
//! let run = pipe!(add_one, double);
//! assert_eq!(run(3), 8);
//! ```
//!
//! ## Mathematical composition
//!
//! ```
//! use pipelars::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = f(g(x))
//! let composed = compose!(add_one, double);
//! assert_eq!(composed(5), 11);
//! ```
//!
//! ## Currying
//!
//! ```rust,ignore
//! use pipelars::curry;
//!
//! let add = curry!(|a: i32, b: i32| a + b);
//! let add_five = add(5);
//! assert_eq!(add_five(3), 8);
//! ```
//!
//! # Laws
//!
//! - **Composition**: `pipe!(f1, ..., fn)(x) == fn(...(f1(x)))`
//! - **Single-step identity**: `pipe!(f)(x) == f(x)`
//! - **Pipe/compose duality**: `pipe!(f, g)(x) == compose!(g, f)(x)`
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//!
//! # Seed Providers
//!
//! A pipeline whose first step produces its own input rather than
//! transforming one is expressed as a step from `()`; the runner is then
//! invoked with `()`:
//!
//! ```
//! use pipelars::pipe;
//!
//! let run = pipe!(|()| 40, |x: i32| x + 2);
//! assert_eq!(run(()), 42);
//! ```

mod compose_macro;
#[cfg(feature = "async")]
mod pipe_async_macro;
mod pipe_macro;
mod utils;

// Re-export helper functions
pub use utils::{__, Placeholder, constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
#[cfg(feature = "async")]
pub use crate::pipe_async;

// The currying macros live in the proc-macro crate and are re-exported at
// the crate root.
pub use crate::{curry, partial};
