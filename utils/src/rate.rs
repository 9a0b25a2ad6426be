//! Debounce and throttle over tokio timers.
//!
//! # Design
//! Each wrapper owns one pending-task handle, the only shared state in this
//! module. `Debouncer` is trailing: every call cancels the pending timer and
//! reschedules with the newest value, so a burst fires once with the last
//! arguments. `Throttler` is leading-ignore: calls made while a timer is
//! pending are dropped. Callbacks run on the tokio runtime `call` was
//! invoked on; dropping a wrapper cancels its pending invocation.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Default delay for both wrappers.
pub const DEFAULT_RATE_DELAY: Duration = Duration::from_millis(300);

type Callback<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Trailing debounce: the callback fires `delay` after the last call.
pub struct Debouncer<T: Send + 'static> {
    delay: Duration,
    callback: Callback<T>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration, callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: Mutex::new(None),
        }
    }

    /// Schedule the callback with `value`, cancelling any pending invocation.
    pub fn call(&self, value: T) {
        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback(value);
        });
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.replace(task) {
            previous.abort();
        }
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(task) = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            task.abort();
        }
    }
}

/// Leading-ignore throttle: while a timer is pending, calls are dropped.
pub struct Throttler<T: Send + 'static> {
    delay: Duration,
    callback: Callback<T>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Throttler<T> {
    pub fn new(delay: Duration, callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: Mutex::new(None),
        }
    }

    /// Schedule the callback with `value` unless one is already pending.
    pub fn call(&self, value: T) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = pending.as_ref() {
            if !task.is_finished() {
                return;
            }
        }
        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback(value);
        }));
    }
}

impl<T: Send + 'static> Drop for Throttler<T> {
    fn drop(&mut self) {
        if let Some(task) = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            task.abort();
        }
    }
}
