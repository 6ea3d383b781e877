//! HTTP Call Transport
//!
//! Posts call requests to the server's `/make-call` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::domain::{CallRequest, RawResponse, SubmitError};
use crate::ports::CallTransport;

/// Endpoint path for starting a call
pub const MAKE_CALL_PATH: &str = "/make-call";

/// reqwest-backed transport for the call server
#[derive(Debug, Clone)]
pub struct HttpCallTransport {
    client: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpCallTransport {
    /// Create a transport for the server at `base_url`
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Abort requests that take longer than `timeout`. No limit by default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, MAKE_CALL_PATH)
    }
}

#[async_trait]
impl CallTransport for HttpCallTransport {
    async fn post_call(&self, request: &CallRequest) -> Result<RawResponse, SubmitError> {
        let url = self.endpoint();
        tracing::debug!("POST {} (voice: {})", url, request.voice);

        let mut builder = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let resp = builder.send().await.map_err(transport_error)?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(transport_error)?;

        Ok(RawResponse::new(status, body))
    }
}

fn transport_error(e: reqwest::Error) -> SubmitError {
    SubmitError::Transport(e.to_string())
}
