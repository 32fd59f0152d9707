//! Stage functions
//!
//! Each stage consumes the previous pipeline state, performs exactly one
//! collaborator call, and returns a new state. Failures never escape a
//! stage: every failure mode of the underlying call ends up in the returned
//! state's `error` field, tagged with the stage that produced it.

use tarmac_client::error::ClientError;
use tarmac_client::{DetectionApi, FormsApi, SubmissionApi};
use tarmac_core::domain::report::ReportState;

use super::{DONE_SUBMITTED, STEP_DETECT, STEP_FORM, STEP_SUBMIT};

/// Stage 1: analyze the image for damage
///
/// The raw image is transient input: it is removed from the state before
/// the collaborator call so it cannot survive into later stages or error
/// paths, regardless of the call's outcome.
pub(crate) async fn detect(api: &dyn DetectionApi, mut state: ReportState) -> ReportState {
    tracing::info!("{}", STEP_DETECT);

    let image = state.image.take();
    let mut next = ReportState {
        progress_message: Some(STEP_DETECT.to_string()),
        ..state
    };

    let Some(image) = image else {
        next.error = Some("Detection failed: no image payload in state".to_string());
        return next;
    };

    match api.detect(image).await {
        Ok(result) => {
            tracing::info!(
                "Detection verdict: {:?} priority for '{}'",
                result.priority,
                result.item
            );
            next.detection_result = Some(result);
        }
        Err(e) => {
            log_stage_failure("Detection", &e);
            next.error = Some(format!("Detection failed: {}", e));
        }
    }

    next
}

/// Stage 2: generate a maintenance form from the detection verdict
///
/// The entire detection result is forwarded; the returned form is stored
/// verbatim and never validated here.
pub(crate) async fn generate_form(api: &dyn FormsApi, state: ReportState) -> ReportState {
    tracing::info!("{}", STEP_FORM);

    let mut next = ReportState {
        progress_message: Some(STEP_FORM.to_string()),
        ..state
    };

    let result = match next.detection_result.as_ref() {
        Some(detection) => api.generate_form(detection).await,
        None => {
            next.error = Some("Form generation failed: no detection result".to_string());
            return next;
        }
    };

    match result {
        Ok(form) => next.form_result = Some(form),
        Err(e) => {
            log_stage_failure("Form generation", &e);
            next.error = Some(format!("Form generation failed: {}", e));
        }
    }

    next
}

/// Stage 3: submit the form to the durable store
pub(crate) async fn submit(api: &dyn SubmissionApi, state: ReportState) -> ReportState {
    tracing::info!("{}", STEP_SUBMIT);

    let mut next = ReportState {
        progress_message: Some(STEP_SUBMIT.to_string()),
        ..state
    };

    let result = match next.form_result.as_ref() {
        Some(form) => api.submit(form).await,
        None => {
            next.error = Some("Submission failed: no form to submit".to_string());
            return next;
        }
    };

    match result {
        Ok(receipt) => {
            tracing::info!("Report submitted, ticket {}", receipt.ticket_id);
            next.submission_result = Some(receipt);
            next.progress_message = Some(DONE_SUBMITTED.to_string());
        }
        Err(e) => {
            log_stage_failure("Submission", &e);
            next.error = Some(format!("Submission failed: {}", e));
        }
    }

    next
}

/// Logs a stage failure, keeping malformed-response failures distinguishable
/// from request failures in telemetry.
fn log_stage_failure(stage: &str, err: &ClientError) {
    if err.is_format() {
        tracing::error!("{} returned a malformed response: {}", stage, err);
    } else if err.is_timeout() {
        tracing::error!("{} request timed out: {}", stage, err);
    } else {
        tracing::error!("{} request failed: {}", stage, err);
    }
}
