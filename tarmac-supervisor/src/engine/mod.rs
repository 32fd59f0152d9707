//! Report workflow engine
//!
//! Drives one image report through the three-stage remediation pipeline:
//! detect damage, generate a maintenance form, submit it to the durable
//! store. The workflow is a small state machine with a single branch after
//! detection; a stage failure halts it, and each stage runs at most once
//! per invocation. Retries are the caller's responsibility (the whole run
//! is idempotent from the supervisor's perspective).

pub mod stages;

use std::sync::Arc;

use tarmac_client::{DetectionApi, FormsApi, SubmissionApi};
use tarmac_core::domain::report::ReportState;

pub(crate) const STEP_DETECT: &str = "Step 1/3: Analyzing image for damage...";
pub(crate) const STEP_FORM: &str = "Step 2/3: Generating maintenance form...";
pub(crate) const STEP_SUBMIT: &str = "Step 3/3: Submitting final report to database...";
pub(crate) const DONE_SUBMITTED: &str = "Done. Report submitted successfully.";
pub(crate) const DONE_NO_DAMAGE: &str = "Done. No damage detected.";

/// Workflow phases
///
/// `Done` and `Failed` are terminal; everything else advances in pipeline
/// order with one conditional branch at `Deciding`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Detecting,
    Deciding,
    GeneratingForm,
    Submitting,
    Done,
    Failed,
}

/// Outcome of the post-detection branch decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Decision {
    /// Proceed to form generation
    Continue,
    /// Stop the workflow with the given terminal progress message
    Halt(String),
}

/// Decides whether the detection verdict warrants a report
pub(crate) fn decide(state: &ReportState) -> Decision {
    match &state.detection_result {
        Some(detection) if detection.priority.is_actionable() => Decision::Continue,
        _ => Decision::Halt(DONE_NO_DAMAGE.to_string()),
    }
}

/// The report workflow
///
/// Collaborators are injected as trait objects so tests can substitute
/// deterministic fakes.
pub struct Workflow {
    detector: Arc<dyn DetectionApi>,
    forms: Arc<dyn FormsApi>,
    submitter: Arc<dyn SubmissionApi>,
}

impl Workflow {
    /// Creates a workflow over the given collaborator clients
    pub fn new(
        detector: Arc<dyn DetectionApi>,
        forms: Arc<dyn FormsApi>,
        submitter: Arc<dyn SubmissionApi>,
    ) -> Self {
        Self {
            detector,
            forms,
            submitter,
        }
    }

    /// Runs the workflow to a terminal state
    ///
    /// Never fails outward: every collaborator failure is captured into the
    /// returned state's `error` field and halts further stages. Stage
    /// results written before the failing stage are preserved.
    pub async fn run(&self, initial: ReportState) -> ReportState {
        let mut state = initial;
        let mut phase = Phase::Detecting;

        loop {
            phase = match phase {
                Phase::Detecting => {
                    state = stages::detect(self.detector.as_ref(), state).await;
                    if state.is_failed() {
                        Phase::Failed
                    } else {
                        Phase::Deciding
                    }
                }
                Phase::Deciding => match decide(&state) {
                    Decision::Continue => Phase::GeneratingForm,
                    Decision::Halt(message) => {
                        tracing::info!("{}", message);
                        state.progress_message = Some(message);
                        Phase::Done
                    }
                },
                Phase::GeneratingForm => {
                    state = stages::generate_form(self.forms.as_ref(), state).await;
                    if state.is_failed() {
                        Phase::Failed
                    } else {
                        Phase::Submitting
                    }
                }
                Phase::Submitting => {
                    state = stages::submit(self.submitter.as_ref(), state).await;
                    if state.is_failed() {
                        Phase::Failed
                    } else {
                        Phase::Done
                    }
                }
                Phase::Done | Phase::Failed => break,
            };
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use tarmac_client::error::{ClientError, Result as ClientResult};
    use tarmac_core::domain::detection::{BoundingBox, DetectionResult, IncidentKind, Priority};
    use tarmac_core::domain::report::SubmissionReceipt;

    fn verdict(priority: Priority) -> DetectionResult {
        DetectionResult {
            kind: IncidentKind::DamagedBaggage,
            item: "suitcase".to_string(),
            description: "cracked shell".to_string(),
            priority,
            bbox: Some(BoundingBox::Region {
                x_min: 0.2,
                y_min: 0.3,
                x_max: 0.8,
                y_max: 0.7,
            }),
        }
    }

    fn initial_state() -> ReportState {
        ReportState::new(json!({"name": "A. Crew"}), vec![0xFF, 0xD8, 0xFF, 0xE0])
    }

    struct StubDetector(DetectionResult);

    #[async_trait]
    impl DetectionApi for StubDetector {
        async fn detect(&self, _image: Vec<u8>) -> ClientResult<DetectionResult> {
            Ok(self.0.clone())
        }
    }

    struct FailingDetector;

    #[async_trait]
    impl DetectionApi for FailingDetector {
        async fn detect(&self, _image: Vec<u8>) -> ClientResult<DetectionResult> {
            Err(ClientError::api_error(502, "detector unavailable"))
        }
    }

    struct EchoForms;

    #[async_trait]
    impl FormsApi for EchoForms {
        async fn generate_form(&self, detection: &DetectionResult) -> ClientResult<Value> {
            Ok(serde_json::to_value(detection).unwrap())
        }
    }

    struct FailingForms;

    #[async_trait]
    impl FormsApi for FailingForms {
        async fn generate_form(&self, _detection: &DetectionResult) -> ClientResult<Value> {
            Err(ClientError::api_error(500, "forms exploded"))
        }
    }

    struct EchoSubmitter;

    #[async_trait]
    impl SubmissionApi for EchoSubmitter {
        async fn submit(&self, form: &Value) -> ClientResult<SubmissionReceipt> {
            Ok(SubmissionReceipt {
                status: "success".to_string(),
                ticket_id: "ticket-1".to_string(),
                extra: [("submitted_report".to_string(), form.clone())]
                    .into_iter()
                    .collect(),
            })
        }
    }

    struct FailingSubmitter;

    #[async_trait]
    impl SubmissionApi for FailingSubmitter {
        async fn submit(&self, _form: &Value) -> ClientResult<SubmissionReceipt> {
            Err(ClientError::api_error(503, "store offline"))
        }
    }

    struct MalformedSubmitter;

    #[async_trait]
    impl SubmissionApi for MalformedSubmitter {
        async fn submit(&self, _form: &Value) -> ClientResult<SubmissionReceipt> {
            Err(ClientError::ParseError(
                "missing field `ticket_id`".to_string(),
            ))
        }
    }

    fn workflow(
        detector: impl DetectionApi + 'static,
        forms: impl FormsApi + 'static,
        submitter: impl SubmissionApi + 'static,
    ) -> Workflow {
        Workflow::new(Arc::new(detector), Arc::new(forms), Arc::new(submitter))
    }

    #[tokio::test]
    async fn test_no_damage_halts_before_form() {
        let workflow = workflow(
            StubDetector(verdict(Priority::None)),
            EchoForms,
            EchoSubmitter,
        );

        let terminal = workflow.run(initial_state()).await;

        assert!(terminal.error.is_none());
        assert!(terminal.detection_result.is_some());
        assert!(terminal.form_result.is_none());
        assert!(terminal.submission_result.is_none());
        assert_eq!(terminal.progress_message.as_deref(), Some(DONE_NO_DAMAGE));
    }

    #[tokio::test]
    async fn test_full_run_populates_all_results() {
        let workflow = workflow(
            StubDetector(verdict(Priority::High)),
            EchoForms,
            EchoSubmitter,
        );

        let terminal = workflow.run(initial_state()).await;

        assert!(terminal.error.is_none());
        let detection = terminal.detection_result.as_ref().unwrap();
        assert_eq!(detection.priority, Priority::High);

        // The echo form is exactly the detection result the form service saw
        let form = terminal.form_result.as_ref().unwrap();
        assert_eq!(form, &serde_json::to_value(detection).unwrap());

        let receipt = terminal.submission_result.as_ref().unwrap();
        assert_eq!(receipt.status, "success");
        assert_eq!(terminal.progress_message.as_deref(), Some(DONE_SUBMITTED));
    }

    #[tokio::test]
    async fn test_detection_failure_halts_workflow() {
        let workflow = workflow(FailingDetector, EchoForms, EchoSubmitter);

        let terminal = workflow.run(initial_state()).await;

        let error = terminal.error.as_deref().unwrap();
        assert!(error.starts_with("Detection failed:"), "got: {error}");
        assert!(terminal.detection_result.is_none());
        assert!(terminal.form_result.is_none());
        assert!(terminal.submission_result.is_none());
    }

    #[tokio::test]
    async fn test_form_failure_preserves_detection() {
        let workflow = workflow(
            StubDetector(verdict(Priority::Medium)),
            FailingForms,
            EchoSubmitter,
        );

        let terminal = workflow.run(initial_state()).await;

        let error = terminal.error.as_deref().unwrap();
        assert!(error.starts_with("Form generation failed:"), "got: {error}");
        assert!(terminal.detection_result.is_some());
        assert!(terminal.form_result.is_none());
        assert!(terminal.submission_result.is_none());
    }

    #[tokio::test]
    async fn test_submission_failure_preserves_partial_progress() {
        let workflow = workflow(
            StubDetector(verdict(Priority::Severe)),
            EchoForms,
            FailingSubmitter,
        );

        let terminal = workflow.run(initial_state()).await;

        let error = terminal.error.as_deref().unwrap();
        assert!(error.starts_with("Submission failed:"), "got: {error}");
        assert!(terminal.detection_result.is_some());
        assert!(terminal.form_result.is_some());
        assert!(terminal.submission_result.is_none());
    }

    #[tokio::test]
    async fn test_malformed_submission_response_is_a_failure() {
        let workflow = workflow(
            StubDetector(verdict(Priority::High)),
            EchoForms,
            MalformedSubmitter,
        );

        let terminal = workflow.run(initial_state()).await;

        let error = terminal.error.as_deref().unwrap();
        assert!(error.contains("parse"), "got: {error}");
        assert!(terminal.form_result.is_some());
        assert!(terminal.submission_result.is_none());
    }

    #[tokio::test]
    async fn test_image_is_cleared_in_every_terminal_state() {
        let success = workflow(
            StubDetector(verdict(Priority::High)),
            EchoForms,
            EchoSubmitter,
        );
        let failure = workflow(FailingDetector, EchoForms, EchoSubmitter);

        let terminal = success.run(initial_state()).await;
        assert!(terminal.image.is_none());

        let terminal = failure.run(initial_state()).await;
        assert!(terminal.image.is_none());
    }

    #[test]
    fn test_decision_requires_actionable_priority() {
        let mut state = initial_state();
        assert!(matches!(decide(&state), Decision::Halt(_)));

        state.detection_result = Some(verdict(Priority::None));
        assert!(matches!(decide(&state), Decision::Halt(_)));

        state.detection_result = Some(verdict(Priority::Low));
        assert_eq!(decide(&state), Decision::Continue);
    }
}
