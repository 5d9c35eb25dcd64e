// SPDX-License-Identifier: MPL-2.0
//! One-shot deadlines for the banner lifecycle.
//!
//! All scheduling runs on the single UI task queue: deadlines are armed with
//! a monotonic instant and polled on each tick rather than spawning timers.
//! A fired or cancelled deadline never reports due again, so a late poll
//! after a click-dismissal is harmless.

use std::time::{Duration, Instant};

/// A cancellable one-shot deadline.
#[derive(Debug, Clone, Copy)]
pub struct OneShot {
    deadline: Instant,
    spent: bool,
}

impl OneShot {
    /// Arms a deadline `delay` from `now`.
    #[must_use]
    pub fn arm(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
            spent: false,
        }
    }

    /// Reports whether the deadline has been reached, consuming it.
    ///
    /// Returns `true` at most once over the lifetime of the deadline.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        if self.spent || now < self.deadline {
            return false;
        }
        self.spent = true;
        true
    }

    /// Cancels the deadline; it will never fire afterwards.
    pub fn cancel(&mut self) {
        self.spent = true;
    }

    /// Returns the armed deadline instant.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}
