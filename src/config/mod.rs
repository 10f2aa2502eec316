//! Configuration module for the homework bot.

mod app_config;
mod helpers;
mod http_base;
mod http_retry;

pub use app_config::{
    AppConfig, ConfigurationError, Credentials, DEFAULT_ENDPOINT, DEFAULT_TELEGRAM_API_URL,
    ENV_PREFIX,
};
pub use helpers::{
    deserialize_duration_from_ms, deserialize_duration_from_seconds, serialize_duration_to_ms,
    serialize_duration_to_seconds,
};
pub use http_base::BaseHttpClientConfig;
pub use http_retry::{HttpRetryConfig, JitterSetting};
