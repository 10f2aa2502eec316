//! This module provides the HTTP clients shared by the API client and the
//! notifier.

mod client;

pub use client::{
    HttpClientError, create_base_http_client, create_plain_http_client,
    create_retryable_http_client,
};
