//! Error types for chat delivery.

use thiserror::Error;

/// A message could not be delivered to the chat.
///
/// Always carries the underlying cause. The poll loop logs it and moves on.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The messaging API could not be reached, after transient retries.
    #[error("Failed to reach the messaging API: {0}")]
    Request(#[from] reqwest_middleware::Error),

    /// The messaging API answered but refused the message.
    #[error("Messaging API rejected the message with status {status}: {description}")]
    Rejected {
        /// HTTP status of the reply.
        status: u16,
        /// Error description reported by the API, or the raw body.
        description: String,
    },

    /// The sendMessage URL could not be assembled from the configuration.
    #[error("Invalid messaging API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
