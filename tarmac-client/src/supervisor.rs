//! Supervisor API endpoints

use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::SupervisorClient;
use crate::error::{ClientError, Result};
use tarmac_core::dto::chat::{ChatRequest, ChatResponse};
use tarmac_core::dto::report::ReportResponse;

impl SupervisorClient {
    /// Send one chat turn to the assistant
    ///
    /// # Arguments
    /// * `user_id` - Identifier scoping the conversational session
    /// * `message` - The user's message
    ///
    /// # Returns
    /// The assistant's reply
    pub async fn chat(&self, user_id: &str, message: &str) -> Result<ChatResponse> {
        let url = format!("{}/chat", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&ChatRequest {
                user_id: user_id.to_string(),
                message: message.to_string(),
            })
            .send()
            .await?;

        crate::handle_response(response).await
    }

    /// Submit an image report through the full remediation workflow
    ///
    /// # Arguments
    /// * `image` - Raw image bytes (JPEG)
    /// * `file_name` - Original file name, forwarded for bookkeeping
    /// * `user_info` - Reporter metadata, passed through opaquely
    ///
    /// # Returns
    /// The terminal workflow state; a stage failure is reported in-band via
    /// the response's `error` field, not as an HTTP error.
    pub async fn submit_report(
        &self,
        image: Vec<u8>,
        file_name: &str,
        user_info: &Value,
    ) -> Result<ReportResponse> {
        let url = format!("{}/supervisor", self.base_url);

        let user_json = serde_json::to_string(user_info)
            .map_err(|e| ClientError::ParseError(format!("Failed to encode user info: {}", e)))?;
        let part = Part::bytes(image)
            .file_name(file_name.to_string())
            .mime_str("image/jpeg")?;
        let form = Form::new().part("image", part).text("user", user_json);

        let response = self.client.post(&url).multipart(form).send().await?;

        crate::handle_response(response).await
    }
}
