//! HTTP transport module
//!
//! The API client only needs one capability from the network: send a request
//! (method, path with query, optional JSON body) and get back status, headers
//! and body. That capability is the [`Transport`] trait; [`HttpClient`] is the
//! reqwest-backed implementation.
//!
//! # Features
//!
//! - **Base URL joining**: request paths are resolved against the API root
//! - **Authentication**: bearer token or basic credentials on every request
//! - **Rate Limiting**: optional token bucket limiter using governor
//!
//! The transport never retries. Connection failures come back as
//! [`Error::Http`](crate::error::Error::Http) and non-success statuses are
//! returned as ordinary responses for the caller to judge.

mod auth;
mod client;
mod rate_limit;
mod transport;

pub use auth::AuthConfig;
pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use transport::{HttpRequest, HttpResponse, Transport};

#[cfg(test)]
mod tests;
