//! # Notification
//!
//! Delivery of report messages to the configured chat.
//!
//! - **`Notifier` Trait**: the seam the poll loop talks to. It takes the
//!   destination chat and a plain-text message.
//! - **`TelegramNotifier`**: the Bot API implementation.
//! - **Payload Builder**: constructs the `sendMessage` JSON body.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

pub mod error;
pub mod payload_builder;
mod telegram;

pub use error::DeliveryError;
pub use telegram::TelegramNotifier;

/// Delivers text messages to a chat.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `message` to `chat_id`.
    ///
    /// Every transport-level failure is returned as a `DeliveryError`.
    async fn notify(&self, chat_id: &str, message: &str) -> Result<(), DeliveryError>;
}
