//! Detection service client
//!
//! Ships the raw image as a multipart upload and parses the structured
//! verdict out of the response.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};

use crate::error::Result;
use crate::handle_response;
use crate::traits::DetectionApi;
use tarmac_core::domain::detection::DetectionResult;

/// HTTP client for the image-detection service
#[derive(Debug, Clone)]
pub struct DetectionClient {
    endpoint: String,
    client: Client,
}

impl DetectionClient {
    /// Creates a client for the given analyze endpoint
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
impl DetectionApi for DetectionClient {
    async fn detect(&self, image: Vec<u8>) -> Result<DetectionResult> {
        let part = Part::bytes(image)
            .file_name("image.jpg")
            .mime_str("image/jpeg")?;
        let form = Form::new().part("image", part);

        tracing::debug!("Sending image to detection service at {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
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
        let client = DetectionClient::new("http://localhost:9000/analyze");
        assert_eq!(client.endpoint, "http://localhost:9000/analyze");
    }
}
