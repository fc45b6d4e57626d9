pub mod multipart;
pub mod rate_limiter;
pub mod reqwest;
pub mod throttle;

#[cfg(test)]
pub mod testing;
