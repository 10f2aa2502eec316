//! This module provides functionality to create the base HTTP client and the
//! middleware-wrapped clients built on top of it.

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{Jitter, RetryTransientMiddleware, policies::ExponentialBackoff};
use thiserror::Error;

use crate::config::{BaseHttpClientConfig, HttpRetryConfig, JitterSetting};

/// Errors that can occur while building HTTP clients.
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// An error occurred while building the underlying `reqwest::Client`.
    #[error("Failed to create HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Builds the `reqwest::Client` every outgoing request goes through.
///
/// The whole-request timeout bounds a single poll cycle so that a hung
/// connection cannot stall the loop.
pub fn create_base_http_client(
    config: &BaseHttpClientConfig,
) -> Result<reqwest::Client, HttpClientError> {
    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(config.max_idle_per_host)
        .pool_idle_timeout(Some(config.idle_timeout))
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .build()?;
    Ok(client)
}

/// Wraps a client without any middleware.
pub fn create_plain_http_client(base_client: reqwest::Client) -> ClientWithMiddleware {
    ClientBuilder::new(base_client).build()
}

/// Creates a retryable HTTP client with middleware for transient errors
///
/// # Parameters:
/// - `config`: Configuration for retry policies
/// - `base_client`: The base HTTP client to use
///
/// # Returns
/// A `ClientWithMiddleware` that includes retry capabilities
pub fn create_retryable_http_client(
    config: &HttpRetryConfig,
    base_client: reqwest::Client,
) -> ClientWithMiddleware {
    let policy_builder = match config.jitter {
        JitterSetting::None => ExponentialBackoff::builder().jitter(Jitter::None),
        JitterSetting::Full => ExponentialBackoff::builder().jitter(Jitter::Full),
    };

    let retry_policy = policy_builder
        .base(config.base_for_backoff)
        .retry_bounds(config.initial_backoff_ms, config.max_backoff_secs)
        .build_with_max_retries(config.max_retries);

    ClientBuilder::new(base_client)
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build()
}
