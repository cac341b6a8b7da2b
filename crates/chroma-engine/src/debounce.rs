use std::time::{Duration, Instant};

/// Default persistence debounce window.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

/// Single-shot, re-armable deadline.
///
/// Arming cancels and replaces any pending deadline; `fire` reports
/// readiness at most once per arm. The owner pumps it from its event
/// loop; there is no background thread, so teardown cannot race a
/// callback.
#[derive(Debug)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }

    /// Start (or restart) the window from now.
    pub fn arm(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once when the armed deadline has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
