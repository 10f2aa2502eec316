//! A `HomeworkSource` backed by the Practicum homework statuses endpoint.

use std::fmt;

use async_trait::async_trait;
use reqwest::{StatusCode, header::AUTHORIZATION};
use reqwest_middleware::ClientWithMiddleware;
use url::Url;

use super::traits::{ApiError, HomeworkSource};

/// Issues one authorized GET per call, without retries of its own.
pub struct PracticumClient {
    endpoint: Url,
    token: String,
    client: ClientWithMiddleware,
}

impl fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticumClient").field("endpoint", &self.endpoint.as_str()).finish()
    }
}

impl PracticumClient {
    /// Creates a new `PracticumClient`.
    pub fn new(endpoint: Url, token: impl Into<String>, client: ClientWithMiddleware) -> Self {
        Self { endpoint, token: token.into(), client }
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    #[tracing::instrument(skip(self), level = "debug")]
    async fn fetch_updates(&self, since_timestamp: i64) -> Result<serde_json::Value, ApiError> {
        let from_date =
            if since_timestamp == 0 { chrono::Utc::now().timestamp() } else { since_timestamp };
        tracing::info!(from_date, endpoint = %self.endpoint, "Requesting homework statuses.");

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.map_err(reqwest_middleware::Error::from)?;

        if status != StatusCode::OK {
            tracing::error!(status = status.as_u16(), "Homework API returned unexpected status.");
            return Err(ApiError::unexpected_status(status, body));
        }

        let value = serde_json::from_str(&body)?;
        tracing::debug!("Homework API response decoded.");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use super::*;
    use crate::test_helpers::create_test_http_client;

    fn create_client(url: &str) -> PracticumClient {
        PracticumClient::new(
            Url::parse(url).unwrap(),
            "api-token",
            create_test_http_client(),
        )
    }

    #[tokio::test]
    async fn test_fetch_updates_sends_auth_header_and_from_date() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/user_api/homework_statuses/")
            .match_header("Authorization", "OAuth api-token")
            .match_query(Matcher::UrlEncoded("from_date".into(), "1700000000".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"homeworks": [], "current_date": 1700000600}"#)
            .create_async()
            .await;

        let client =
            create_client(&format!("{}/api/user_api/homework_statuses/", server.url()));
        let value = client.fetch_updates(1_700_000_000).await.unwrap();

        assert_eq!(value, json!({"homeworks": [], "current_date": 1700000600}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_updates_zero_timestamp_means_now() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_query(Matcher::Regex("from_date=[1-9][0-9]+".into()))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = create_client(&server.url());
        assert!(client.fetch_updates(0).await.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_updates_non_200_is_unexpected_status() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("internal error")
            .expect(1)
            .create_async()
            .await;

        let client = create_client(&server.url());
        let error = client.fetch_updates(1).await.unwrap_err();

        match error {
            ApiError::UnexpectedStatus { status, reason, body } => {
                assert_eq!(status, 500);
                assert_eq!(reason, "Internal Server Error");
                assert_eq!(body, "internal error");
            }
            other => panic!("Expected UnexpectedStatus, got {other:?}"),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_updates_other_2xx_is_unexpected_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(204)
            .create_async()
            .await;

        let client = create_client(&server.url());
        let error = client.fetch_updates(1).await.unwrap_err();
        assert!(matches!(error, ApiError::UnexpectedStatus { status: 204, .. }));
    }

    #[tokio::test]
    async fn test_fetch_updates_invalid_json_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = create_client(&server.url());
        let error = client.fetch_updates(1).await.unwrap_err();
        assert!(matches!(error, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_updates_connection_failure_is_transport_error() {
        let client = create_client("http://127.0.0.1:1/");
        let error = client.fetch_updates(1).await.unwrap_err();
        assert!(matches!(error, ApiError::Transport(_)));
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let client = create_client("http://localhost/");
        assert!(!format!("{client:?}").contains("api-token"));
    }
}
