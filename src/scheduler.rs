// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Single-slot debouncing for query events.
//!
//! Typing fires an input event per keystroke; running the pipeline on each one
//! is wasted work. The debouncer holds at most one pending task. Submitting a
//! new task replaces the pending one and restarts the wait, so only the last
//! event in a burst ever runs.
//!
//! Time is passed in rather than read from a clock, which keeps the debouncer
//! deterministic under test. A task that has been handed out by [`poll`] is
//! gone; there is nothing to cancel mid-run.
//!
//! [`poll`]: Debouncer::poll

use std::time::{Duration, Instant};

/// Default quiet period before a query runs.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(120);

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `task` to run `delay` after `now`, replacing any pending task.
    ///
    /// Returns the task that was superseded, if any. A delay too large to
    /// represent leaves the task pending until [`flush`](Self::flush).
    pub fn submit(&mut self, now: Instant, task: T) -> Option<T> {
        let deadline = now.checked_add(self.delay).unwrap_or_else(|| far_future(now));
        self.pending.replace((deadline, task)).map(|(_, old)| old)
    }

    /// Take the pending task if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => self.pending.take().map(|(_, task)| task),
            _ => None,
        }
    }

    /// Drop the pending task without running it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, task)| task)
    }

    /// Take the pending task regardless of its deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.cancel()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// How long until the pending task is due. `None` when idle, zero when due.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(deadline, _)| deadline.saturating_duration_since(now))
    }
}

/// The latest instant reachable from `now`, found by halving the step.
fn far_future(now: Instant) -> Instant {
    let mut step = Duration::from_secs(u64::MAX / 2);
    let mut deadline = now;
    while step > Duration::ZERO {
        if let Some(later) = deadline.checked_add(step) {
            deadline = later;
        } else {
            step /= 2;
        }
    }
    deadline
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
