//! Cancellable one-shot timer.
//!
//! A `DelayTimer` holds at most one pending deadline. Scheduling replaces
//! any previous pending deadline, which is exactly the debounce contract
//! the profile card and dialog transitions need: the newest intent wins.
//! The timer is polled from the UI tick rather than spawning tasks, so all
//! firing happens on the UI thread.

use std::time::{Duration, Instant};

/// A cancellable one-shot deadline polled from the UI tick.
#[derive(Debug, Default, Clone, Copy)]
pub struct DelayTimer {
    deadline: Option<Instant>,
}

impl DelayTimer {
    /// Create a timer with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the timer to fire `delay` from `now`, replacing any
    /// previously pending deadline.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Cancel the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume and report the deadline if it is due at `now`.
    ///
    /// Returns true at most once per scheduled deadline.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timer_is_idle() {
        let mut timer = DelayTimer::new();
        assert!(!timer.is_pending());
        assert!(!timer.fire_if_due(Instant::now()));
    }

    #[test]
    fn test_fires_only_at_deadline() {
        let now = Instant::now();
        let mut timer = DelayTimer::new();
        timer.schedule(now, Duration::from_millis(150));

        assert!(!timer.fire_if_due(now + Duration::from_millis(100)));
        assert!(timer.is_pending());
        assert!(timer.fire_if_due(now + Duration::from_millis(150)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_fires_at_most_once() {
        let now = Instant::now();
        let mut timer = DelayTimer::new();
        timer.schedule(now, Duration::from_millis(10));

        assert!(timer.fire_if_due(now + Duration::from_secs(1)));
        assert!(!timer.fire_if_due(now + Duration::from_secs(2)));
    }

    #[test]
    fn test_reschedule_replaces_previous_deadline() {
        let now = Instant::now();
        let mut timer = DelayTimer::new();
        timer.schedule(now, Duration::from_millis(10));
        timer.schedule(now, Duration::from_millis(500));

        // The first deadline no longer exists.
        assert!(!timer.fire_if_due(now + Duration::from_millis(100)));
        assert!(timer.fire_if_due(now + Duration::from_millis(500)));
    }

    #[test]
    fn test_cancel_clears_deadline() {
        let now = Instant::now();
        let mut timer = DelayTimer::new();
        timer.schedule(now, Duration::from_millis(10));
        timer.cancel();

        assert!(!timer.is_pending());
        assert!(!timer.fire_if_due(now + Duration::from_secs(1)));
    }
}
