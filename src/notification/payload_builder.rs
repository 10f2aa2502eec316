//! # Telegram Payload Builder
//!
//! Builds the JSON body of a Bot API `sendMessage` call. Messages are sent
//! as plain text, without a parse mode, so nothing needs escaping.

use serde_json::json;

/// Maximum length of a Telegram message, in characters.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// A payload builder for Telegram notifications.
///
/// Telegram requires a `chat_id` and the message content in a `text` field.
pub struct TelegramPayloadBuilder {
    /// The chat ID to send the message to.
    pub chat_id: String,
}

impl TelegramPayloadBuilder {
    /// Cuts `text` to the Telegram limit, marking the cut with an ellipsis.
    fn truncate(text: &str) -> String {
        if text.chars().count() <= TELEGRAM_MESSAGE_LIMIT {
            return text.to_string();
        }
        let mut out: String = text.chars().take(TELEGRAM_MESSAGE_LIMIT - 1).collect();
        out.push('…');
        out
    }

    /// Builds the `sendMessage` payload for `text`.
    pub fn build_payload(&self, text: &str) -> serde_json::Value {
        json!({
            "chat_id": self.chat_id,
            "text": Self::truncate(text),
        })
    }
}
