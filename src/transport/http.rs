//! Default HTTP transport: the request envelope travels as a JSON POST body.

use async_trait::async_trait;
use tracing::debug;

use super::{RawReply, Transport};
use crate::envelope::ActionRequest;
use crate::error::ClientError;

/// Posts each request envelope as JSON to a fixed endpoint.
///
/// Static headers configured at construction are applied to every request.
/// Header names/values are validated by the underlying HTTP stack at send
/// time; a malformed pair surfaces as a transport rejection on the first
/// call rather than being silently dropped.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    headers: Vec<(String, String)>,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_headers(endpoint, Vec::new())
    }

    pub fn with_headers(endpoint: impl Into<String>, headers: Vec<(String, String)>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            headers,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ActionRequest) -> Result<RawReply, ClientError> {
        let mut builder = self.client.post(&self.endpoint).json(request);
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await.map_err(|e| {
            ClientError::transport_with(format!("request to {} failed", self.endpoint), e)
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::transport_with("failed to read reply body", e))?;

        debug!(status, bytes = body.len(), "reply received");
        Ok(RawReply::new(status, body.to_vec()))
    }
}
