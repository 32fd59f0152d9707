//! Tarmac HTTP Clients
//!
//! Type-safe HTTP clients for the Tarmac incident-report system:
//!
//! - One narrow client per collaborator service consumed by the supervisor
//!   (detection, forms, submission, chat model), each implementing its
//!   capability trait from [`traits`].
//! - [`SupervisorClient`] for the supervisor's own public API, used by the
//!   CLI.
//!
//! # Example
//!
//! ```no_run
//! use tarmac_client::SupervisorClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SupervisorClient::new("http://localhost:8085");
//!
//!     let response = client.chat("crew-17", "My seat tray is broken").await?;
//!     println!("{}", response.reply);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod traits;

mod chat;
mod detection;
mod forms;
mod submission;
mod supervisor;

// Re-export commonly used types
pub use chat::ChatModelClient;
pub use detection::DetectionClient;
pub use error::{ClientError, Result};
pub use forms::FormsClient;
pub use submission::SubmissionClient;
pub use traits::{ChatModel, DetectionApi, FormsApi, SubmissionApi};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Handle a service response and deserialize its JSON body
///
/// Non-success statuses are surfaced as [`ClientError::ApiError`] rather than
/// being parsed as a success body; a success body that does not match `T`
/// becomes [`ClientError::ParseError`].
pub(crate) async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::api_error(status.as_u16(), error_text));
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
}

/// HTTP client for the supervisor's public API
///
/// Provides the two entry points the supervisor exposes: conversational chat
/// turns and full image-report submissions.
#[derive(Debug, Clone)]
pub struct SupervisorClient {
    /// Base URL of the supervisor (e.g., "http://localhost:8085")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl SupervisorClient {
    /// Create a new supervisor client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the supervisor API
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new supervisor client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use tarmac_client::SupervisorClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(60))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = SupervisorClient::with_client("http://localhost:8085", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the supervisor
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = SupervisorClient::new("http://localhost:8085");
        assert_eq!(client.base_url(), "http://localhost:8085");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = SupervisorClient::new("http://localhost:8085/");
        assert_eq!(client.base_url(), "http://localhost:8085");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = SupervisorClient::with_client("http://localhost:8085", http_client);
        assert_eq!(client.base_url(), "http://localhost:8085");
    }
}
