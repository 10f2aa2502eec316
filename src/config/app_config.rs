use std::{fmt, path::PathBuf, time::Duration};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use super::{
    BaseHttpClientConfig, HttpRetryConfig, deserialize_duration_from_seconds, helpers::non_blank,
};

/// Homework statuses endpoint of the review API.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Base URL of the Telegram Bot API.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Prefix of the environment variables read by [`AppConfig::new`].
pub const ENV_PREFIX: &str = "HOMEWORK";

/// Provides the default value for retry_interval_secs.
fn default_retry_interval() -> Duration {
    Duration::from_secs(600)
}

/// Provides the default value for log_file.
fn default_log_file() -> PathBuf {
    PathBuf::from("homework_bot.log")
}

/// Errors raised while assembling the startup configuration.
///
/// All of them are fatal: the process logs them and exits.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The configuration sources could not be read or deserialized.
    #[error("Config error: {0}")]
    Load(#[from] ConfigError),

    /// A mandatory credential is absent or blank.
    #[error("Missing required credential '{0}'")]
    MissingCredential(&'static str),
}

/// Application configuration for the homework bot.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// OAuth token of the homework review API.
    #[serde(default)]
    pub practicum_token: Option<String>,

    /// Telegram bot token.
    #[serde(default)]
    pub telegram_token: Option<String>,

    /// Destination chat for notifications.
    #[serde(default)]
    pub telegram_chat_id: Option<String>,

    /// Homework statuses endpoint.
    pub endpoint: Url,

    /// Base URL of the Telegram Bot API.
    pub telegram_api_url: Url,

    /// Fixed pause between two poll cycles.
    #[serde(
        deserialize_with = "deserialize_duration_from_seconds",
        default = "default_retry_interval"
    )]
    pub retry_interval_secs: Duration,

    /// Log file, truncated on every start.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Configuration for the base HTTP client.
    #[serde(default)]
    pub http_base_config: BaseHttpClientConfig,

    /// Retry policy applied to chat deliveries.
    #[serde(default)]
    pub delivery_retry_config: HttpRetryConfig,
}

/// The three mandatory secrets, validated.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// OAuth token of the homework review API.
    pub practicum_token: String,
    /// Telegram bot token.
    pub telegram_token: String,
    /// Destination chat for notifications.
    pub telegram_chat_id: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

impl AppConfig {
    /// Creates a new `AppConfig` from `<config_dir>/app.yaml` (optional) and
    /// `HOMEWORK__*` environment variables, the latter taking precedence.
    pub fn new(config_dir: Option<&str>) -> Result<Self, ConfigurationError> {
        Self::from_sources(config_dir, Environment::with_prefix(ENV_PREFIX).separator("__"))
    }

    fn from_sources(
        config_dir: Option<&str>,
        environment: Environment,
    ) -> Result<Self, ConfigurationError> {
        let config_dir_str = config_dir.unwrap_or("configs");
        let s = Config::builder()
            .set_default("endpoint", DEFAULT_ENDPOINT)?
            .set_default("telegram_api_url", DEFAULT_TELEGRAM_API_URL)?
            .add_source(File::with_name(&format!("{config_dir_str}/app.yaml")).required(false))
            .add_source(environment)
            .build()?;
        Ok(s.try_deserialize()?)
    }

    /// Returns the API token alone, enough for read-only commands.
    pub fn practicum_token(&self) -> Result<&str, ConfigurationError> {
        non_blank(self.practicum_token.as_deref())
            .ok_or(ConfigurationError::MissingCredential("practicum_token"))
    }

    /// Checks that every credential is present and non-blank.
    pub fn credentials(&self) -> Result<Credentials, ConfigurationError> {
        let practicum_token = self.practicum_token()?.to_string();
        let telegram_token = non_blank(self.telegram_token.as_deref())
            .ok_or(ConfigurationError::MissingCredential("telegram_token"))?
            .to_string();
        let telegram_chat_id = non_blank(self.telegram_chat_id.as_deref())
            .ok_or(ConfigurationError::MissingCredential("telegram_chat_id"))?
            .to_string();

        Ok(Credentials { practicum_token, telegram_token, telegram_chat_id })
    }
}
