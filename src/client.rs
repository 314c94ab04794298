//! HTTP client for a running codemix server.
//!
//! Transient failures (connection errors, timeouts, 5xx) are retried with
//! exponential backoff; a 4xx response fails immediately with the server's
//! `error` message, which is meant to be shown to the user as-is.

use crate::processor::AnalysisResult;
use crate::retry::RetryPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Request timeout for a single attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server refused the input (4xx).
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// Whether another attempt could succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ClientError::Rejected { .. })
    }
}

#[derive(Debug, Serialize)]
struct ProcessRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for `POST /api/process`.
#[derive(Debug, Clone)]
pub struct ProcessClient {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl ProcessClient {
    /// Create a client for the server at `base_url` (e.g. "http://localhost:5000").
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::process(),
        })
    }

    /// Override the retry policy for process requests.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Analyze `text` on the server.
    pub async fn process(&self, text: &str) -> Result<AnalysisResult, ClientError> {
        let url = format!("{}/api/process", self.base_url);
        let http = &self.http;
        let url = &url;

        self.retry
            .run("Process text", || async move {
                let response = http
                    .post(url)
                    .json(&ProcessRequest { text })
                    .send()
                    .await?;
                let response = check_status(response).await?;
                Ok(response.json::<AnalysisResult>().await?)
            })
            .await
    }

    /// Wait until the server answers its health check.
    pub async fn wait_until_healthy(&self) -> Result<(), ClientError> {
        let url = format!("{}/health", self.base_url);
        let http = &self.http;
        let url = &url;

        RetryPolicy::health_check()
            .run("Health check", || async move {
                let response = http.get(url).send().await?;
                check_status(response).await?;
                debug!("Server at {} is healthy", url);
                Ok(())
            })
            .await
    }
}

/// Turn a non-success response into a `ClientError`, using the `error`
/// field of the body when present.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.error)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("Processing failed")
                .to_string()
        });

    if status.is_client_error() {
        Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
        })
    } else {
        Err(ClientError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_is_not_retryable() {
        let error = ClientError::Rejected {
            status: 400,
            message: "No text provided".to_string(),
        };
        assert!(!error.is_retryable());
        assert_eq!(error.to_string(), "No text provided");
    }

    #[test]
    fn test_server_error_is_retryable() {
        let error = ClientError::Server {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(error.is_retryable());
        assert_eq!(error.to_string(), "Server error (500): boom");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ProcessClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.base_url, "http://localhost:5000");
    }
}
