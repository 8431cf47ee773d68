//! Retry adapters for fallible asynchronous steps.

use std::time::Duration;

/// Wraps a fallible asynchronous step so that an `Err` outcome re-invokes
/// it, up to `max_attempts` total attempts.
///
/// The input is cloned into each attempt. On success the value is
/// returned immediately; when every attempt fails, the last error is
/// returned. A `max_attempts` of 0 is treated as 1 — the step always runs
/// at least once.
///
/// # Examples
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use pipelars::timing::retry;
///
/// let attempts = Arc::new(AtomicUsize::new(0));
/// let probe = Arc::clone(&attempts);
///
/// let flaky = async move |x: i32| {
///     if probe.fetch_add(1, Ordering::SeqCst) < 2 {
///         Err("not yet")
///     } else {
///         Ok(x * 2)
///     }
/// };
///
/// let resilient = retry(5, flaky);
/// assert_eq!(resilient(21).await, Ok(42));
/// assert_eq!(attempts.load(Ordering::SeqCst), 3);
/// ```
#[allow(clippy::missing_panics_doc)]
pub fn retry<T, U, E, F>(max_attempts: usize, step: F) -> impl AsyncFn(T) -> Result<U, E>
where
    T: Clone,
    F: AsyncFn(T) -> Result<U, E>,
{
    let effective_attempts = max_attempts.max(1);

    async move |input: T| {
        let mut last_error = None;

        for _ in 0..effective_attempts {
            match step(input.clone()).await {
                Ok(value) => return Ok(value),
                Err(error) => last_error = Some(error),
            }
        }

        Err(last_error.expect("at least one attempt was made"))
    }
}

/// Like [`retry`], sleeping with exponential backoff before each retry.
///
/// The first attempt runs immediately; before attempt `n + 1` the adapter
/// sleeps `initial_delay * 2^(n - 1)` — `initial_delay` before the second
/// attempt, doubled before each attempt after that. Delay arithmetic
/// saturates instead of overflowing.
///
/// # Examples
///
/// ```rust,ignore
/// use std::time::Duration;
/// use pipelars::timing::retry_with_backoff;
///
/// let resilient = retry_with_backoff(3, Duration::from_millis(100), fetch);
/// // Sleeps 100ms before the 2nd attempt, 200ms before the 3rd.
/// let value = resilient(request).await?;
/// ```
#[allow(clippy::missing_panics_doc)]
pub fn retry_with_backoff<T, U, E, F>(
    max_attempts: usize,
    initial_delay: Duration,
    step: F,
) -> impl AsyncFn(T) -> Result<U, E>
where
    T: Clone,
    F: AsyncFn(T) -> Result<U, E>,
{
    let effective_attempts = max_attempts.max(1);

    async move |input: T| {
        let mut last_error = None;

        for attempt in 0..effective_attempts {
            if attempt > 0 {
                let exponent = u32::try_from(attempt - 1).unwrap_or(u32::MAX);
                let delay = initial_delay.saturating_mul(2u32.saturating_pow(exponent));
                tokio::time::sleep(delay).await;
            }

            match step(input.clone()).await {
                Ok(value) => return Ok(value),
                Err(error) => last_error = Some(error),
            }
        }

        Err(last_error.expect("at least one attempt was made"))
    }
}
