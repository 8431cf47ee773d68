//! Trailing-edge debouncing of a callable.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// Collapses bursts of calls: only the last call of a burst runs, after
/// the quiet period elapses.
///
/// Each [`call`](Self::call) aborts the previously scheduled invocation
/// (if it has not fired yet) and schedules a fresh one `delay` in the
/// future on the ambient tokio runtime. The per-call state — the pending
/// timer handle — is owned by the `Debounce` value; dropping it cancels
/// whatever is still pending.
///
/// # Examples
///
/// ```rust,ignore
/// use std::time::Duration;
/// use pipelars::timing::Debounce;
///
/// let save = Debounce::new(Duration::from_millis(300), |document: String| {
///     persist(document);
/// });
///
/// // Rapid edits; only the last one persists, 300ms after it.
/// save.call("draft 1".to_string());
/// save.call("draft 2".to_string());
/// save.call("draft 3".to_string());
/// ```
pub struct Debounce<F> {
    delay: Duration,
    function: Arc<F>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<F> Debounce<F> {
    /// Creates a debouncer around the given callable.
    pub fn new(delay: Duration, function: F) -> Self {
        Self {
            delay,
            function: Arc::new(function),
            pending: Mutex::new(None),
        }
    }

    /// Schedules an invocation with the given argument, displacing any
    /// invocation still pending from an earlier call.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime, as the deferred
    /// invocation is spawned on it.
    pub fn call<A>(&self, argument: A)
    where
        F: Fn(A) + Send + Sync + 'static,
        A: Send + 'static,
    {
        let function = Arc::clone(&self.function);
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            function(argument);
        });

        if let Some(displaced) = self.pending.lock().replace(handle) {
            displaced.abort();
        }
    }

    /// Cancels the pending invocation, if any.
    pub fn cancel(&self) {
        if let Some(pending) = self.pending.lock().take() {
            pending.abort();
        }
    }

    /// Whether an invocation is currently scheduled and has not fired.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<F> Drop for Debounce<F> {
    fn drop(&mut self) {
        self.cancel();
    }
}
