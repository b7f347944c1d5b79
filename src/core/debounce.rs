//! Fetch debouncing.
//!
//! Keystrokes arm a deadline instead of firing a fetch directly; the event
//! loop polls the deadline and only fetches once the buffer has been quiet
//! for the whole window. Each new mutation supersedes the previous deadline.

use std::time::{Duration, Instant};

/// Quiet period a query buffer must hold before a fetch is dispatched.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(200);

#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Arms (or re-arms) the deadline one window from now.
    pub fn note_mutation(&mut self) {
        self.deadline = Some(Instant::now() + self.window);
    }

    /// Drops any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// One-shot expiry check: returns true the first time it is called after
    /// the deadline has passed, disarming in the same step.
    pub fn poll_expired(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time remaining until expiry, if armed. Used to size poll timeouts so
    /// the event loop wakes exactly when the window closes.
    pub fn time_left(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}
