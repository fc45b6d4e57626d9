use std::sync::Arc;

#[macro_use]
extern crate lazy_static;

use crate::app::{envy::Envy, util::throttle::Throttle};

pub mod app;
pub mod avatars;
pub mod client;
pub mod photos;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub http: reqwest::Client,
    pub throttle: Throttle,
}

impl AppState {
    pub fn new(envy: Envy) -> Self {
        Self {
            throttle: Throttle::new(envy.generate_cooldown_secs),
            http: reqwest::Client::new(),
            envy: Arc::new(envy),
        }
    }
}
