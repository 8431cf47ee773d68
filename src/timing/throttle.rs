//! Leading-edge throttling of a callable.

use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

/// Allows at most one invocation per interval.
///
/// The first call of a window runs immediately and returns
/// `Some(result)`; further calls inside the window are suppressed and
/// return `None`. The per-call state — the last-invocation instant — is
/// owned by the `Throttle` value.
///
/// Timestamps come from [`tokio::time::Instant`], so a paused test clock
/// drives the window.
///
/// # Examples
///
/// ```rust,ignore
/// use std::time::Duration;
/// use pipelars::timing::Throttle;
///
/// let report = Throttle::new(Duration::from_secs(1), |progress: u8| {
///     println!("{progress}%");
///     progress
/// });
///
/// assert_eq!(report.call(10), Some(10)); // runs
/// assert_eq!(report.call(11), None);     // inside the window
/// ```
pub struct Throttle<F> {
    interval: Duration,
    function: F,
    last_invocation: Mutex<Option<Instant>>,
}

impl<F> Throttle<F> {
    /// Creates a throttle around the given callable.
    pub fn new(interval: Duration, function: F) -> Self {
        Self {
            interval,
            function,
            last_invocation: Mutex::new(None),
        }
    }

    /// Invokes the callable if the interval has elapsed since the last
    /// accepted call; returns `None` otherwise.
    pub fn call<A, R>(&self, argument: A) -> Option<R>
    where
        F: Fn(A) -> R,
    {
        {
            let mut last_invocation = self.last_invocation.lock();
            let now = Instant::now();

            if last_invocation
                .is_some_and(|previous| now.duration_since(previous) < self.interval)
            {
                return None;
            }

            *last_invocation = Some(now);
            // Lock released before user code runs.
        }

        Some((self.function)(argument))
    }

    /// Forgets the last invocation, reopening the window immediately.
    pub fn reset(&self) {
        *self.last_invocation.lock() = None;
    }
}
