//! Submission service client
//!
//! Forwards a completed form to the durable store and parses the receipt.
//! A body that fails to parse comes back as `ParseError` so callers can tag
//! a malformed receipt distinctly from a failed request.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::Result;
use crate::handle_response;
use crate::traits::SubmissionApi;
use tarmac_core::domain::report::SubmissionReceipt;

/// HTTP client for the report-submission service
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    endpoint: String,
    client: Client,
}

impl SubmissionClient {
    /// Creates a client for the given submit endpoint
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
impl SubmissionApi for SubmissionClient {
    async fn submit(&self, form: &Value) -> Result<SubmissionReceipt> {
        tracing::debug!("Submitting report to {}", self.endpoint);

        let response = self.client.post(&self.endpoint).json(form).send().await?;

        handle_response(response).await
    }
}
