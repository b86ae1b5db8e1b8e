//! HTTP client wrapper producing normalized envelopes.

use pantry_core::config::ApiConfig;
use pantry_core::Envelope;
use serde_json::Value;
use std::time::Duration;

use crate::error::ClientError;

/// Thin wrapper around [`reqwest::Client`] that sends JSON and converts
/// every outcome (transport failure, non-2xx status, unparseable body)
/// into an [`Envelope`]. Failures also emit a `tracing` diagnostic.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    /// Build a client from the API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { inner })
    }

    pub async fn get(&self, url: &str) -> Envelope {
        self.execute(self.inner.get(url), url).await
    }

    pub async fn post(&self, url: &str, body: &Value) -> Envelope {
        self.execute(self.inner.post(url).json(body), url).await
    }

    pub async fn put(&self, url: &str, body: &Value) -> Envelope {
        self.execute(self.inner.put(url).json(body), url).await
    }

    pub async fn delete(&self, url: &str) -> Envelope {
        self.execute(self.inner.delete(url), url).await
    }

    async fn execute(&self, request: reqwest::RequestBuilder, url: &str) -> Envelope {
        match Self::round_trip(request).await {
            Ok(data) => Envelope::Success(data),
            Err(error) => {
                tracing::warn!(url, %error, "backend request failed");
                Envelope::failure(error)
            }
        }
    }

    async fn round_trip(request: reqwest::RequestBuilder) -> Result<Value, ClientError> {
        let response = request
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(ClientError::Decode)
    }
}
