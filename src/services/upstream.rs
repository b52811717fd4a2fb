use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("Request to {url} timed out")]
    Timeout { url: String },
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Upstream {url} responded {status} {reason}")]
    Status {
        url: String,
        status: StatusCode,
        reason: String,
    },
    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl UpstreamError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    fn from_send(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            UpstreamError::Timeout {
                url: url.to_string(),
            }
        } else {
            UpstreamError::Transport {
                url: url.to_string(),
                source,
            }
        }
    }
}

/// Thin JSON-over-HTTP client shared by every upstream call. Cloning is cheap
/// and reuses the same connection pool.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    client: Client,
}

impl UpstreamClient {
    pub fn new(timeout: Duration) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(UpstreamError::ClientBuild)?;

        Ok(Self { client })
    }

    pub async fn get(&self, url: &str) -> Result<Value, UpstreamError> {
        self.fetch(Method::GET, url, None).await
    }

    pub async fn post(&self, url: &str, body: &Value) -> Result<Value, UpstreamError> {
        self.fetch(Method::POST, url, Some(body)).await
    }

    /// Sends a request and decodes the body as JSON.
    ///
    /// The body is always read to the end before decoding, so the connection
    /// goes back to the pool whether the status or the payload is bad.
    pub async fn fetch(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Value, UpstreamError> {
        debug!("{} {}", method, url);

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| UpstreamError::from_send(url, e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::from_send(url, e))?;

        if !status.is_success() {
            warn!("Upstream {} responded {}", url, status);
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status,
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| UpstreamError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    /// Any HTTP response counts as reachable; only transport failures do not.
    pub async fn is_reachable(&self, url: &str) -> bool {
        match self.client.get(url).send().await {
            Ok(response) => {
                debug!("Reachability check {} responded {}", url, response.status());
                true
            }
            Err(e) => {
                warn!("Reachability check {} failed: {}", url, e);
                false
            }
        }
    }
}
