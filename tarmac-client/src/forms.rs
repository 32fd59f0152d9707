//! Forms service client
//!
//! Forwards the full detection result and returns the generated form as
//! opaque JSON. The form's schema belongs to the service; nothing here
//! validates it.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::Result;
use crate::handle_response;
use crate::traits::FormsApi;
use tarmac_core::domain::detection::DetectionResult;

/// HTTP client for the form-generation service
#[derive(Debug, Clone)]
pub struct FormsClient {
    endpoint: String,
    client: Client,
}

impl FormsClient {
    /// Creates a client for the given generate-form endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, Client::new())
    }

    /// Creates a client with a custom HTTP client (timeouts, TLS, etc.)
    pub fn with_client(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }
}

#[async_trait]
impl FormsApi for FormsClient {
    async fn generate_form(&self, detection: &DetectionResult) -> Result<Value> {
        tracing::debug!("Requesting form generation at {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(detection)
            .send()
            .await?;

        handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = FormsClient::new("http://localhost:9001/generate_form");
        assert_eq!(client.endpoint, "http://localhost:9001/generate_form");
    }
}
