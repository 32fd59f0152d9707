//! Collaborator capability traits
//!
//! Each remote service the supervisor depends on is abstracted behind a
//! narrow one-method trait so the workflow can be exercised against
//! deterministic fakes. Endpoints are injected at construction, never
//! hardcoded at the call site.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use tarmac_core::domain::detection::DetectionResult;
use tarmac_core::domain::report::SubmissionReceipt;

/// Image analysis: classify an issue from a JPEG payload
#[async_trait]
pub trait DetectionApi: Send + Sync {
    /// Analyzes the image and returns the structured detection verdict
    async fn detect(&self, image: Vec<u8>) -> Result<DetectionResult>;
}

/// Form generation: fill an incident form from a detection verdict
#[async_trait]
pub trait FormsApi: Send + Sync {
    /// Generates a form from the detection result
    ///
    /// The returned form is caller-opaque JSON; its schema belongs to the
    /// forms service and is forwarded downstream unexamined.
    async fn generate_form(&self, detection: &DetectionResult) -> Result<Value>;
}

/// Durable store: persist a completed form and return a receipt
#[async_trait]
pub trait SubmissionApi: Send + Sync {
    /// Submits the form and returns the store's receipt
    async fn submit(&self, form: &Value) -> Result<SubmissionReceipt>;
}

/// Conversational model: turn an assembled prompt into a reply
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Completes the prompt and returns the model's free-text reply
    async fn complete(&self, prompt: &str) -> Result<String>;
}
