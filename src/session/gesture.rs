//! Double-tap keyboard gesture detection
//!
//! Counts keydowns that land within a short quiet window of each other. The
//! second tap inside the window fires the gesture. Any key qualifies; the
//! detector does not care which keys were pressed, only when.
//!
//! There is no background timer: the deadline is stored data, expired either
//! lazily on the next keydown or eagerly by [`DoubleTap::tick`] from the
//! event loop. Dropping the detector drops the pending window with it.

use std::time::{Duration, Instant};

/// Quiet period within which two keydowns count as a double tap
pub const TAP_LATENCY: Duration = Duration::from_millis(300);

/// Tap counter with a rearming expiry deadline
#[derive(Debug, Clone)]
pub struct DoubleTap {
    count: u8,
    deadline: Option<Instant>,
    latency: Duration,
}

impl DoubleTap {
    pub fn new() -> Self {
        Self::with_latency(TAP_LATENCY)
    }

    /// Detector with a custom quiet period
    pub fn with_latency(latency: Duration) -> Self {
        DoubleTap {
            count: 0,
            deadline: None,
            latency,
        }
    }

    /// Record a keydown at `now`. Returns true when this tap completes a
    /// double tap, in which case the counter is cleared.
    pub fn key_down(&mut self, now: Instant) -> bool {
        // A stale window means the earlier tap no longer counts
        self.expire(now);

        self.count += 1;
        if self.count >= 2 {
            self.count = 0;
            self.deadline = None;
            return true;
        }
        self.deadline = Some(now + self.latency);
        false
    }

    /// Expire the window if its deadline has passed
    pub fn tick(&mut self, now: Instant) {
        self.expire(now);
    }

    /// Whether a first tap is pending inside its window
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drop any pending tap
    pub fn reset(&mut self) {
        self.count = 0;
        self.deadline = None;
    }

    fn expire(&mut self, now: Instant) {
        if let Some(deadline) = self.deadline {
            if now > deadline {
                self.count = 0;
                self.deadline = None;
            }
        }
    }
}

impl Default for DoubleTap {
    fn default() -> Self {
        Self::new()
    }
}
