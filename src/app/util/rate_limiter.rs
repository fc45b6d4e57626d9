use std::time::{Duration, Instant};

/// Accepts at most one attempt per `interval`. Only accepted attempts move
/// the window; rejected ones leave it where it was.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    interval: Duration,
    last_accepted: Option<Instant>,
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_accepted: None,
        }
    }

    pub fn allow(&self, now: Instant) -> bool {
        match self.last_accepted {
            Some(last) => now.saturating_duration_since(last) >= self.interval,
            None => true,
        }
    }

    pub fn try_acquire(&mut self, now: Instant) -> bool {
        if !self.allow(now) {
            return false;
        }

        self.last_accepted = Some(now);
        true
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn last_accepted(&self) -> Option<Instant> {
        self.last_accepted
    }
}
