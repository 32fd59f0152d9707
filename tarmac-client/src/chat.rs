//! Chat model client
//!
//! The conversational collaborator takes an assembled prompt and returns
//! free text. The reply is the raw response body, so there is no JSON shape
//! to validate on the way back.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::error::{ClientError, Result};
use crate::traits::ChatModel;

/// HTTP client for the conversational model service
#[derive(Debug, Clone)]
pub struct ChatModelClient {
    endpoint: String,
    client: Client,
}

impl ChatModelClient {
    /// Creates a client for the given completion endpoint
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
impl ChatModel for ChatModelClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "prompt": prompt }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ChatModelClient::new("http://localhost:9003/generate");
        assert_eq!(client.endpoint, "http://localhost:9003/generate");
    }
}
