//! Timer-based step adapters.
//!
//! Nothing in this module is part of the composition engine: these are
//! external collaborators that wrap a step (or any callable) and conform
//! to the step contract from the outside. The engine itself has no
//! cancellation or timeout — once an invocation begins it runs to
//! completion, short-circuit, or panic — so deadlines and rate limits are
//! layered here, around individual steps.
//!
//! Per-call state (last-invocation instant, pending timer handle) lives
//! in the returned closures and owned structs, never in module-level
//! globals.
//!
//! - [`retry`] / [`retry_with_backoff`]: re-invoke a fallible
//!   asynchronous step
//! - [`timeout`]: race a step's future against a deadline
//! - [`Debounce`]: collapse bursts of calls into the trailing one
//! - [`Throttle`]: allow at most one call per interval (leading edge)
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use pipelars::timing::{retry, timeout};
//!
//! # async fn fetch(url: String) -> Result<String, FetchError> { unimplemented!() }
//! let guarded = timeout(Duration::from_secs(2), retry(3, fetch));
//! let body = guarded("https://example.com/".to_string()).await;
//! ```

mod debounce;
mod retry;
mod throttle;
mod timeout;

pub use debounce::Debounce;
pub use retry::{retry, retry_with_backoff};
pub use throttle::Throttle;
pub use timeout::{TimeoutElapsed, timeout};
