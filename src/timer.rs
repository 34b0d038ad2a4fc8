//! Countdown timers for cooldowns and durations.
//!
//! A [`Countdown`] replaces a deferred callback: it is restarted with a
//! duration, advanced by the simulation clock, and reports the moment it
//! elapses. Each timer slot holds at most one deadline, so restarting while
//! pending cancels the previous deadline instead of stacking a second one.

use serde::Serialize;

/// Single-deadline timer advanced by the simulation clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Countdown {
    remaining: Option<f32>,
}

impl Countdown {
    /// Timer with no deadline.
    #[must_use]
    pub const fn idle() -> Self {
        Self { remaining: None }
    }

    /// Cancels any pending deadline and starts a new one.
    pub const fn restart(&mut self, duration: f32) {
        self.remaining = Some(duration.max(0.0));
    }

    /// Drops the pending deadline, if any.
    pub const fn cancel(&mut self) {
        self.remaining = None;
    }

    /// A deadline is set and has not been reached.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Seconds left before the deadline.
    #[must_use]
    pub const fn remaining(&self) -> Option<f32> {
        self.remaining
    }

    /// Advances the clock by `dt` seconds.
    ///
    /// Returns `true` exactly once, on the advance that reaches the deadline;
    /// the timer is idle afterwards.
    ///
    /// # Examples
    /// ```
    /// use strider::timer::Countdown;
    /// let mut timer = Countdown::idle();
    /// timer.restart(0.25);
    /// assert!(!timer.advance(0.2));
    /// assert!(timer.advance(0.2));
    /// assert!(!timer.advance(0.2));
    /// ```
    pub const fn advance(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };
        let left = remaining - dt;
        if left <= 0.0 {
            self.remaining = None;
            true
        } else {
            self.remaining = Some(left);
            false
        }
    }
}
