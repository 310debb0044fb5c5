//! HTTP client module
//!
//! Thin wrapper over reqwest used by the catalog client.
//!
//! # Features
//!
//! - **Base URL joining**: relative paths resolve against a configured base
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Status classification**: non-2xx responses become `Error::HttpStatus`
//!
//! Failed requests are never retried here; callers decide what to do.

mod client;
mod rate_limit;

pub use client::{default_user_agent, HttpClient, HttpClientConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
