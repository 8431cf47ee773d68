//! Deadline adapter for asynchronous steps.

use std::fmt;
use std::time::Duration;

/// Error returned when a step misses its deadline.
///
/// Carries the deadline that was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutElapsed {
    /// The deadline that was exceeded.
    pub duration: Duration,
}

impl fmt::Display for TimeoutElapsed {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "step timed out after {:?}", self.duration)
    }
}

impl std::error::Error for TimeoutElapsed {}

/// Wraps an asynchronous step so its future races against a deadline.
///
/// The step's result is returned when it completes in time; past the
/// deadline the step's future is dropped and `Err(TimeoutElapsed)` comes
/// back instead.
///
/// # Examples
///
/// ```rust,ignore
/// use std::time::Duration;
/// use pipelars::timing::timeout;
///
/// let prompt = timeout(Duration::from_millis(100), slow_lookup);
/// match prompt(key).await {
///     Ok(value) => println!("found {value}"),
///     Err(elapsed) => eprintln!("{elapsed}"),
/// }
/// ```
pub fn timeout<T, U, F>(
    duration: Duration,
    step: F,
) -> impl AsyncFn(T) -> Result<U, TimeoutElapsed>
where
    F: AsyncFn(T) -> U,
{
    async move |input: T| {
        tokio::time::timeout(duration, step(input))
            .await
            .map_err(|_| TimeoutElapsed { duration })
    }
}
