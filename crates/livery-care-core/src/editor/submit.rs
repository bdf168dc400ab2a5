//! Validation and submission.

use async_trait::async_trait;
use log::{debug, warn};

use super::{CarePlanEditor, EditorState};
use crate::{
    error::{CarePlanError, Result, SUBMIT_FAILED_MESSAGE},
    payload::{CarePlanPayload, parse_weekly_price},
};

/// Receives a validated care plan and persists it.
///
/// The editor never decides whether a save worked beyond what this returns;
/// any error is reported to the user as a generic failure.
#[async_trait]
pub trait SubmitCarePlan: Send + Sync {
    async fn submit(&self, payload: CarePlanPayload) -> Result<()>;
}

impl CarePlanEditor {
    /// Checks the tree for anything that must be fixed before saving.
    ///
    /// Returns the first problem found as a user-facing message.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let program = &self.program;
        if program.name.trim().is_empty() {
            return Err("Program name is required".to_string());
        }

        for phase in &program.phases {
            if phase.tasks.iter().any(|task| task.description.trim().is_empty()) {
                return Err(format!(
                    "Please add a description for every task in \"{}\"",
                    phase.name
                ));
            }
        }

        if self.price_field_visible() && parse_weekly_price(&program.weekly_price).is_err() {
            return Err("Weekly price must be a positive number".to_string());
        }

        Ok(())
    }

    /// Validates the tree and hands the payload to `submitter`.
    ///
    /// On a validation failure the submitter is never called. On a rejected
    /// submit the draft is left exactly as it was so the user can retry. In
    /// both cases the editor returns to [`EditorState::Editing`] with
    /// [`error`](Self::error) set. On success the editor is closed.
    ///
    /// # Errors
    ///
    /// Returns `CarePlanError::Validation` or `CarePlanError::SubmissionFailed`.
    pub async fn submit(&mut self, submitter: &dyn SubmitCarePlan) -> Result<()> {
        self.state = EditorState::Validating;
        if let Err(message) = self.validate() {
            debug!("Care plan failed validation: {message}");
            self.error = Some(message.clone());
            self.state = EditorState::Editing;
            return Err(CarePlanError::validation(message));
        }
        self.error = None;

        let payload = match CarePlanPayload::from_draft(self.props.horse_id, &self.program) {
            Ok(payload) => payload,
            Err(e) => {
                self.error = Some(e.to_string());
                self.state = EditorState::Editing;
                return Err(CarePlanError::validation(e.to_string()));
            }
        };

        self.state = EditorState::Submitting;
        match submitter.submit(payload).await {
            Ok(()) => {
                debug!("Care plan for horse {} saved", self.props.horse_id);
                self.state = EditorState::Closed;
                Ok(())
            }
            Err(e) => {
                warn!("Saving care plan for horse {} failed: {e}", self.props.horse_id);
                self.error = Some(SUBMIT_FAILED_MESSAGE.to_string());
                self.state = EditorState::Editing;
                Err(CarePlanError::submission_failed(e))
            }
        }
    }
}
