//! This module defines the interface for fetching homework updates from the
//! review API.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Errors of a single request to the review API.
///
/// None of them is fatal: the poll loop reports them and tries again on the
/// next cycle.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS,
    /// timeout...).
    #[error("Ошибка при запросе к API: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    /// The API answered with anything other than `200 OK`.
    #[error("Эндпоинт API вернул код {status} ({reason}): {body}")]
    UnexpectedStatus {
        /// Numeric HTTP status.
        status: u16,
        /// Canonical reason phrase, empty for non-standard codes.
        reason: String,
        /// Raw response body.
        body: String,
    },

    /// A `200 OK` whose body is not JSON.
    #[error("Ответ API не является корректным JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Builds the `UnexpectedStatus` variant from a status code and body.
    pub fn unexpected_status(status: reqwest::StatusCode, body: impl Into<String>) -> Self {
        ApiError::UnexpectedStatus {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body: body.into(),
        }
    }
}

/// A source of homework status updates.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    /// Fetches every update since `since_timestamp` (Unix seconds).
    ///
    /// A zero timestamp means "from now". The returned value is the raw
    /// decoded body, validated later by the response validator.
    async fn fetch_updates(&self, since_timestamp: i64) -> Result<serde_json::Value, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_includes_diagnostics() {
        let error =
            ApiError::unexpected_status(reqwest::StatusCode::SERVICE_UNAVAILABLE, "maintenance");
        assert_eq!(
            error.to_string(),
            "Эндпоинт API вернул код 503 (Service Unavailable): maintenance"
        );
    }

    #[test]
    fn test_unexpected_status_without_canonical_reason() {
        let status = reqwest::StatusCode::from_u16(599).unwrap();
        let error = ApiError::unexpected_status(status, "");
        assert!(matches!(
            error,
            ApiError::UnexpectedStatus { status: 599, ref reason, .. } if reason.is_empty()
        ));
    }
}
