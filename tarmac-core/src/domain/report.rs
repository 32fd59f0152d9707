//! Report workflow state
//!
//! `ReportState` is the single record threaded through the supervisor's
//! workflow. It is created once per request, consumed and rebuilt by each
//! stage in order, and discarded after the response is serialized.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::domain::detection::DetectionResult;

/// Receipt returned by the submission service once a report is stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub status: String,
    pub ticket_id: String,
    /// Anything else the store echoes back (e.g. the stored report body)
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Mutable state threaded through the report workflow
///
/// Each stage takes the previous state by value and returns a new one, so
/// field presence depends only on how far the workflow progressed, never on
/// in-place deletion order.
///
/// The raw image is transient input: the detection stage consumes it and it
/// is never serialized, so it cannot leak into responses or logs.
#[derive(Debug, Clone, Serialize)]
pub struct ReportState {
    pub user_info: Value,
    #[serde(skip)]
    pub image: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detection_result: Option<DetectionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_result: Option<SubmissionReceipt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReportState {
    /// Creates the initial state for one workflow run
    pub fn new(user_info: Value, image: Vec<u8>) -> Self {
        Self {
            user_info,
            image: Some(image),
            detection_result: None,
            form_result: None,
            submission_result: None,
            progress_message: None,
            error: None,
        }
    }

    /// Whether the workflow halted with a stage failure
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_image_is_never_serialized() {
        let state = ReportState::new(json!({"name": "A. Crew"}), vec![0xFF, 0xD8, 0xFF]);
        let value = serde_json::to_value(&state).unwrap();

        let object = value.as_object().unwrap();
        assert!(!object.contains_key("image"));
        assert_eq!(object["user_info"], json!({"name": "A. Crew"}));
    }

    #[test]
    fn test_unreached_fields_are_absent() {
        let state = ReportState::new(json!({}), vec![]);
        let value = serde_json::to_value(&state).unwrap();

        let object = value.as_object().unwrap();
        assert!(!object.contains_key("detection_result"));
        assert!(!object.contains_key("form_result"));
        assert!(!object.contains_key("submission_result"));
        assert!(!object.contains_key("error"));
    }

    #[test]
    fn test_submission_receipt_keeps_extra_fields() {
        let json = r#"{
            "status": "success",
            "ticket_id": "abc123",
            "submitted_report": {"form_id": "F-7"}
        }"#;

        let receipt: SubmissionReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.status, "success");
        assert_eq!(receipt.ticket_id, "abc123");
        assert!(receipt.extra.contains_key("submitted_report"));
    }
}
