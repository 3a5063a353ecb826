//! Posts Google authorization codes to the backend auth API.

use crate::error::ForwardError;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Upper bound on how much of an error body ends up in logs.
const MAX_ERROR_CONTEXT: usize = 512;

/// JSON body sent to the backend: `{"code": ..., "userId": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExchange {
    /// Passed through exactly as received; `null` when the provider sent none.
    pub code: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: String,
}

impl CodeExchange {
    pub fn new(code: Option<String>, user_id: impl Into<String>) -> Self {
        Self {
            code,
            user_id: user_id.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CodeForwarder {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Option<Duration>,
}

impl CodeForwarder {
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint, timeout)
    }

    pub fn with_client(client: reqwest::Client, endpoint: Url, timeout: Option<Duration>) -> Self {
        Self {
            client,
            endpoint,
            timeout,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send one POST and decode the JSON reply.
    ///
    /// Any non-2xx status is an error, as is a 2xx body that is not JSON.
    #[tracing::instrument(name = "forward_code", skip(self, exchange), fields(endpoint = %self.endpoint, code_present = exchange.code.is_some()))]
    pub async fn forward(&self, exchange: &CodeExchange) -> Result<serde_json::Value, ForwardError> {
        let mut request = self.client.post(self.endpoint.clone()).json(exchange);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.map_transport(e))?;
        let status: StatusCode = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ForwardError::Http {
                status,
                context: truncate(&body, MAX_ERROR_CONTEXT),
            });
        }

        let body = response.bytes().await.map_err(|e| self.map_transport(e))?;
        let value = serde_json::from_slice(&body)
            .map_err(|e| ForwardError::InvalidJson(e.to_string()))?;
        tracing::debug!(%status, "auth backend accepted code");
        Ok(value)
    }

    fn map_transport(&self, err: reqwest::Error) -> ForwardError {
        match self.timeout {
            Some(timeout) if err.is_timeout() => ForwardError::Timeout(timeout),
            _ => ForwardError::Network(err.to_string()),
        }
    }
}

fn truncate(body: &str, max: usize) -> String {
    if body.len() <= max {
        return body.to_string();
    }
    let mut end = max;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
