use std::time::Duration;

/// Single-shot deadline that can be re-armed or cancelled.
///
/// Arming an already armed delay replaces the old deadline, so at most one
/// expiry is ever pending.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Delay {
    deadline: Option<Duration>,
}

impl Delay {
    /// Schedule expiry `delay` after `now`.
    #[inline]
    pub fn arm(&mut self, now: Duration, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Clear the pending deadline.
    #[inline]
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns whether a deadline is set and has not fired yet.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    #[inline]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Consume the deadline and return `true` once `now` reaches it.
    pub fn fire(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            },
            _ => false,
        }
    }
}

/// Coalesces a burst of triggers into the last value after a quiet window.
///
/// Every [`Debounce::trigger`] replaces the pending value and restarts the
/// window, so only the final trigger of a burst is ever yielded.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    wait: Duration,
    pending: Option<T>,
    timer: Delay,
}

impl<T> Debounce<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
            timer: Delay::default(),
        }
    }

    pub fn trigger(&mut self, value: T, now: Duration) {
        self.pending = Some(value);
        self.timer.arm(now, self.wait);
    }

    /// Yield the pending value once the quiet window has elapsed.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        if self.timer.fire(now) {
            self.pending.take()
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.timer.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.timer.deadline()
    }
}
