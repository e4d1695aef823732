use std::sync::Arc;

use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::error::SubmitError;
use crate::payload;
use crate::service::{ScoreAssessment, ScoringService};
use crate::state::FormState;

/// Lifecycle of the current submission attempt. Exactly one variant holds
/// at any instant; a result and an error can never coexist.
#[derive(Debug, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success(ScoreAssessment),
    Failed(SubmitError),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

/// Orchestrates one form's submissions against a scoring service.
///
/// `submit` takes `&mut self`, so a single controller can never run two
/// attempts concurrently; field edits on the shared [`FormState`] remain
/// possible while an attempt is in flight and only affect the next one.
pub struct SubmissionController {
    service: Arc<dyn ScoringService>,
    state: SubmissionState,
}

impl SubmissionController {
    pub fn new(service: Arc<dyn ScoringService>) -> Self {
        Self {
            service,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Run one submission attempt and return the resulting state.
    ///
    /// If the state is still `Submitting` (a prior attempt's future was
    /// dropped mid-flight), the action is ignored, mirroring the form UI,
    /// whose trigger control is disabled while busy. Entering `Submitting`
    /// clears any prior result or error in the same assignment, so no
    /// stale result is ever observable alongside a new attempt.
    ///
    /// The payload is captured from `form` at dispatch; edits made while
    /// the call is in flight do not affect this attempt.
    pub async fn submit(&mut self, form: &FormState) -> &SubmissionState {
        if self.state.is_submitting() {
            warn!("submit ignored: a submission is already in flight");
            return &self.state;
        }
        self.state = SubmissionState::Submitting;

        let request = payload::build_payload(form);
        let attempt_id = Uuid::new_v4();
        let span = info_span!("submission", %attempt_id);

        let outcome = self.service.predict(&request).instrument(span).await;
        self.state = match outcome {
            Ok(assessment) => {
                info!(%attempt_id, credit_score = assessment.credit_score, "scoring succeeded");
                SubmissionState::Success(assessment)
            }
            Err(err) => {
                warn!(%attempt_id, error = %err, "scoring failed");
                SubmissionState::Failed(err)
            }
        };
        &self.state
    }
}
