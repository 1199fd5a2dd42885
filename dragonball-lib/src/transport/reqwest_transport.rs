//! Production transport backed by `reqwest`.
//!
//! # Feature Flags
//!
//! This module requires the `http-transport` feature flag (enabled by default).
//!
//! ```toml
//! [dependencies]
//! dragonball-lib = { version = "1.0", features = ["http-transport"] }
//! ```

use std::time::Duration;

use async_trait::async_trait;

use super::traits::{HttpRequest, HttpResponse, HttpTransport};
use crate::config::ClientConfig;
use crate::{DragonBallError, Result};

/// [`HttpTransport`] that performs real HTTP requests.
///
/// Statuses are passed through untouched; only failures to obtain a response
/// become errors.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout_secs: u64,
}

impl ReqwestTransport {
    /// Create a transport using the timeout and user agent from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| DragonBallError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Map reqwest errors to DragonBallError.
    fn map_reqwest_error(&self, url: &str, e: reqwest::Error) -> DragonBallError {
        if e.is_timeout() {
            DragonBallError::ConnectionTimeout {
                operation: format!("request to {}", url),
                timeout_ms: self.timeout_secs * 1000,
            }
        } else if e.is_connect() {
            DragonBallError::ConnectionFailed {
                target: url.to_string(),
                reason: e.to_string(),
            }
        } else {
            DragonBallError::Transport(format!("request to {} failed: {}", url, e))
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(method, &url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(&url, e))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_reqwest_error(&url, e))?;

        Ok(HttpResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}
