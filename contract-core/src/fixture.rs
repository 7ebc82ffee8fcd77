// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fixture Helpers
//!
//! Small pieces of state that outlive a single call but not a test:
//! process-wide settings restored on drop, and invocation counters.

use std::ffi::OsString;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::trace;

/// Sets an environment variable and restores the previous value on drop.
///
/// The environment is process-wide; tests using the same key must not run
/// concurrently.
#[derive(Debug)]
pub struct EnvGuard {
    key: String,
    previous: Option<OsString>,
}

impl EnvGuard {
    /// Set `key` to `value` until the guard is dropped.
    pub fn set(key: impl Into<String>, value: impl AsRef<std::ffi::OsStr>) -> Self {
        let key = key.into();
        let previous = std::env::var_os(&key);
        std::env::set_var(&key, value);
        trace!(key = %key, "environment variable overridden");
        Self { key, previous }
    }

    /// Remove `key` until the guard is dropped.
    pub fn unset(key: impl Into<String>) -> Self {
        let key = key.into();
        let previous = std::env::var_os(&key);
        std::env::remove_var(&key);
        Self { key, previous }
    }

    /// The guarded variable.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(value) => std::env::set_var(&self.key, value),
            None => std::env::remove_var(&self.key),
        }
        trace!(key = %self.key, "environment variable restored");
    }
}

/// Shared invocation counter; clones observe the same count.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    count: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one call; returns the new count.
    pub fn increment(&self) -> usize {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Calls recorded so far.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset to zero.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

/// A resource with an explicit close.
pub trait Closeable {
    /// Release the resource. Calling it again must be harmless.
    fn close(&mut self);

    /// True once closed.
    fn is_closed(&self) -> bool;
}

/// Closeable fixture counting every `close` call.
#[derive(Debug, Clone, Default)]
pub struct CloseTracker {
    closed: bool,
    calls: CallCounter,
}

impl CloseTracker {
    /// An open tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// An open tracker reporting into an existing counter.
    pub fn with_counter(calls: CallCounter) -> Self {
        Self {
            closed: false,
            calls,
        }
    }

    /// Number of `close` calls, including repeated ones.
    pub fn close_calls(&self) -> usize {
        self.calls.count()
    }
}

impl Closeable for CloseTracker {
    fn close(&mut self) {
        self.calls.increment();
        self.closed = true;
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
