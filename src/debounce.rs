//! Trailing-edge debounce
//!
//! Collapses bursts of calls into a single trailing call carrying the
//! arguments of the last call. Nothing here owns a timer thread: the event
//! loop polls the debouncer on every tick, so firing happens on the same
//! thread that scheduled the call.

use std::time::{Duration, Instant};

/// Default delay between the last keystroke and the suggestion request
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug)]
struct Pending<T> {
    due_at: Instant,
    value: T,
}

/// Holds at most one pending value and the instant it becomes due
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
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

    /// Schedule `value`, replacing whatever was pending
    pub fn schedule(&mut self, value: T) {
        self.schedule_at(value, Instant::now());
    }

    /// Schedule `value` as if the call happened at `now`
    pub fn schedule_at(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            due_at: now + self.delay,
            value,
        });
    }

    /// Drop the pending value, if any. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending value if its deadline has passed
    pub fn poll(&mut self) -> Option<T> {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if pending.due_at <= now => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Time left until the pending value fires, `None` when idle
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.due_at.saturating_duration_since(now))
    }
}

/// A callback guarded by a [`Debouncer`]
///
/// `call` has the same argument as the wrapped callback but only schedules;
/// the callback runs from `fire_due` once the delay has elapsed without a
/// newer call.
pub struct Debounced<T, F>
where
    F: FnMut(T),
{
    debouncer: Debouncer<T>,
    callback: F,
}

impl<T, F> Debounced<T, F>
where
    F: FnMut(T),
{
    pub fn call(&mut self, args: T) {
        self.debouncer.schedule(args);
    }

    pub fn call_at(&mut self, args: T, now: Instant) {
        self.debouncer.schedule_at(args, now);
    }

    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }

    /// Run the callback if a call is due. Returns true if it ran.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.debouncer.poll_at(now) {
            Some(args) => {
                (self.callback)(args);
                true
            }
            None => false,
        }
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }
}

/// Wrap `callback` so that calls within `delay` of each other collapse
/// into one trailing call
pub fn debounce<T, F>(callback: F, delay: Duration) -> Debounced<T, F>
where
    F: FnMut(T),
{
    Debounced {
        debouncer: Debouncer::new(delay),
        callback,
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
