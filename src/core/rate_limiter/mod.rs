//! Rate Limiting Implementation
//!
//! Provides a process-wide sliding window limiter. The limiter is owned explicitly and
//! shared through an `Arc`, so independent instances can coexist (one per test, for example).

mod limiter;
mod types;


pub use limiter::RateLimiter;
pub use types::RateLimitDecision;
