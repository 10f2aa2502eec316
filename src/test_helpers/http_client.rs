use std::time::Duration;

use reqwest::Client;
use reqwest_middleware::ClientWithMiddleware;

use crate::{
    config::{HttpRetryConfig, JitterSetting},
    http_client::{create_plain_http_client, create_retryable_http_client},
};

/// Creates an HTTP client without retries for testing purposes.
pub fn create_test_http_client() -> ClientWithMiddleware {
    create_plain_http_client(Client::new())
}

/// Creates a retrying HTTP client with millisecond backoff so tests stay fast.
pub fn create_test_retrying_http_client(max_retries: u32) -> ClientWithMiddleware {
    let config = HttpRetryConfig {
        max_retries,
        initial_backoff_ms: Duration::from_millis(1),
        max_backoff_secs: Duration::from_millis(5),
        jitter: JitterSetting::None,
        ..Default::default()
    };
    create_retryable_http_client(&config, Client::new())
}
