use std::time::{Duration, Instant};

pub const PROGRESS_TICK: Duration = Duration::from_millis(150);
pub const PROGRESS_MAX: u8 = 100;

/// Simulated loading bar. Counts ticks since the load began, it knows
/// nothing about the real request.
#[derive(Debug, Clone, Default)]
pub struct Progress {
    started: Option<Instant>,
    value: u8,
}

impl Progress {
    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
        self.value = 0;
    }

    pub fn stop(&mut self, now: Instant) {
        self.value = self.value(now);
        self.started = None;
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    pub fn value(&self, now: Instant) -> u8 {
        let Some(started) = self.started else {
            return self.value;
        };

        let ticks = now.saturating_duration_since(started).as_millis() / PROGRESS_TICK.as_millis();
        ticks.min(PROGRESS_MAX as u128) as u8
    }
}
