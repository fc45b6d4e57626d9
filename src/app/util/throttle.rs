use std::{
    collections::HashMap,
    net::IpAddr,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::RwLock;

use super::rate_limiter::RateLimiter;

/// Server-side counterpart of the generation screen's cooldown, one window
/// per client address. Disabled unless a cooldown is configured.
#[derive(Clone, Default)]
pub struct Throttle {
    cooldown: Option<Duration>,
    limiters: Arc<RwLock<HashMap<IpAddr, RateLimiter>>>,
}

impl Throttle {
    pub fn new(cooldown_secs: Option<u64>) -> Self {
        Self {
            cooldown: cooldown_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            limiters: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.cooldown.is_some()
    }

    pub async fn try_acquire(&self, ip: IpAddr, now: Instant) -> bool {
        let Some(cooldown) = self.cooldown else {
            return true;
        };

        let mut limiters = self.limiters.write().await;

        // forget windows that have already elapsed
        limiters.retain(|_, limiter| !limiter.allow(now));

        limiters
            .entry(ip)
            .or_insert_with(|| RateLimiter::new(cooldown))
            .try_acquire(now)
    }
}
