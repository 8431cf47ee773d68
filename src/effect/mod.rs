//! The short-circuit channel: markers, pipeline state, and the
//! short-circuiting composers.
//!
//! # Overview
//!
//! Pipelines built with [`pipe!`](crate::pipe) have exactly one way to
//! stop early: a panicking step. This module adds the second, explicit
//! channel — a step returns a [`SideEffect`] marker instead of a normal
//! value, and the short-circuiting composers stop on the spot:
//!
//! - [`SideEffect`]: a deferred, unexecuted computation plus an optional
//!   label; the marker a step returns to abort
//! - [`PipeResult`]: the two-constructor pipeline state — `Value` or
//!   `Effect` — with the `fmap`/`flat_map` primitives the composers chain
//! - [`IntoPipeResult`] and [`Pure`]: lifting of initial inputs
//! - [`pipe_side_effect!`](crate::pipe_side_effect),
//!   [`pipe_side_effect_strict!`](crate::pipe_side_effect_strict) and the
//!   async counterparts: the short-circuiting composers
//! - [`pipe_with_deps!`](crate::pipe_with_deps) and friends: wrappers
//!   threading a dependency context to every step
//!
//! # The Two Channels
//!
//! A genuine failure (panic) and an intentional early exit (marker) never
//! convert into each other:
//!
//! - a panicking step unwinds through the runner unchanged; the engine
//!   catches nothing
//! - a marker is forwarded untouched, and its wrapped computation runs
//!   only when a consumer explicitly calls [`PipeResult::run`],
//!   [`PipeResult::fold`], or [`SideEffect::run`]
//!
//! User-visible behavior is therefore fully determined by the step
//! definitions alone.
//!
//! # Per-Invocation State Machine
//!
//! `Running(value)` on entry; each step either produces
//! `Running(new_value)`, short-circuits to `ShortCircuited(marker)`
//! (terminal — later steps are skipped and the marker stays unexecuted),
//! or panics (`Failed`, terminal). After the last step the pipeline is
//! `Done(value)`. [`PipeResult`] *is* this machine: `Value` covers
//! Running/Done, `Effect` covers ShortCircuited.
//!
//! # Example
//!
//! ```rust
//! use pipelars::effect::PipeResult;
//! use pipelars::pipe_side_effect;
//!
//! fn parse(raw: &str) -> PipeResult<i32, String> {
//!     raw.trim().parse::<i32>().map_or_else(
//!         |_| {
//!             let raw = raw.to_owned();
//!             PipeResult::halt_with_label(move || format!("unparsable: {raw}"), "parse")
//!         },
//!         PipeResult::Value,
//!     )
//! }
//!
//! let run = pipe_side_effect!(
//!     =>> parse,
//!     => |x: i32| x * 2,
//! );
//!
//! assert_eq!(run(" 21 ").value(), Some(42));
//!
//! let halted = run("twenty-one");
//! assert_eq!(
//!     halted.fold(|v| v.to_string(), |effect| effect.run()),
//!     "unparsable: twenty-one",
//! );
//! ```

mod pipe_result;
mod pipe_side_effect_macro;
#[cfg(feature = "async")]
mod pipe_side_effect_async_macro;
mod side_effect;
mod with_deps_macro;

pub use pipe_result::{IntoPipeResult, PipeResult, Pure};
pub use side_effect::SideEffect;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::pipe_side_effect;
pub use crate::pipe_side_effect_strict;
pub use crate::pipe_side_effect_with_deps;
pub use crate::pipe_with_deps;

#[cfg(feature = "async")]
pub use crate::pipe_side_effect_async;
#[cfg(feature = "async")]
pub use crate::pipe_side_effect_strict_async;
#[cfg(feature = "async")]
pub use crate::pipe_side_effect_with_deps_async;
#[cfg(feature = "async")]
pub use crate::pipe_with_deps_async;
