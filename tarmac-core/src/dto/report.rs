//! Report endpoint DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::detection::DetectionResult;
use crate::domain::report::{ReportState, SubmissionReceipt};

/// Terminal workflow state as returned by POST /supervisor
///
/// The progress message is operational telemetry and is dropped here; the
/// raw image never leaves `ReportState` in the first place. Result fields
/// are present only for stages the workflow actually reached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    pub user_info: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection_result: Option<DetectionResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_result: Option<SubmissionReceipt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ReportState> for ReportResponse {
    fn from(state: ReportState) -> Self {
        Self {
            user_info: state.user_info,
            detection_result: state.detection_result,
            form_result: state.form_result,
            submission_result: state.submission_result,
            error: state.error,
        }
    }
}
