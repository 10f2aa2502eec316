//! Telegram Bot API notifier.
//!
//! Sends plain-text messages through `sendMessage`. The HTTP client is
//! expected to carry the delivery retry policy; this module only maps the
//! final outcome.

use std::fmt;

use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use url::Url;

use super::{Notifier, error::DeliveryError, payload_builder::TelegramPayloadBuilder};

/// Error reply of the Bot API.
#[derive(Debug, Deserialize)]
struct BotApiReply {
    #[serde(default)]
    description: Option<String>,
}

/// Implementation of chat notifications via the Telegram Bot API
pub struct TelegramNotifier {
    /// Full `sendMessage` URL. Contains the bot token.
    send_message_url: Url,
    /// Configured HTTP client for Bot API requests with retry capabilities
    client: ClientWithMiddleware,
}

impl fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramNotifier").finish_non_exhaustive()
    }
}

impl TelegramNotifier {
    /// Creates a new Telegram notifier instance
    ///
    /// # Arguments
    /// * `api_url` - Base URL of the Bot API, e.g. `https://api.telegram.org`
    /// * `token` - Bot token
    /// * `client` - HTTP client with middleware for retries
    pub fn new(
        api_url: &Url,
        token: &str,
        client: ClientWithMiddleware,
    ) -> Result<Self, DeliveryError> {
        // Tokens look like `123:abc`; the leading `./` keeps `bot123:` from
        // parsing as a URL scheme.
        let send_message_url = api_url.join(&format!("./bot{token}/sendMessage"))?;
        Ok(Self { send_message_url, client })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    #[tracing::instrument(skip(self, message), level = "debug")]
    async fn notify(&self, chat_id: &str, message: &str) -> Result<(), DeliveryError> {
        tracing::info!("Sending message to Telegram.");
        let payload =
            TelegramPayloadBuilder { chat_id: chat_id.to_string() }.build_payload(message);

        let response = self.client.post(self.send_message_url.clone()).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let description = serde_json::from_str::<BotApiReply>(&body)
                .ok()
                .and_then(|reply| reply.description)
                .unwrap_or(body);
            return Err(DeliveryError::Rejected { status: status.as_u16(), description });
        }

        tracing::info!("Message sent to Telegram.");
        Ok(())
    }
}
