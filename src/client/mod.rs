//! Client side of the avatar flow: an HTTP client for the backend and the
//! state kept by the generation and conversion screens.

pub mod api;
pub mod converter;
pub mod enums;
pub mod errors;
pub mod generator;
pub mod models;
pub mod progress;
