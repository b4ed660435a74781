//! HTTP client module
//!
//! The opaque fetch primitive the gallery is built on.
//!
//! # Features
//!
//! - **Automatic Retries**: timeouts, connection errors, 429 and 5xx
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Backoff Strategies**: Constant, linear, and exponential backoff

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
