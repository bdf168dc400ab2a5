//! Care plan phase/task editor.
//!
//! [`CarePlanEditor`] owns one [`ProgramDraft`] for as long as the form is
//! open and is the only thing that mutates it. Every operation leaves the tree
//! consistent: phases are numbered `1..=N`, tasks within a phase `1..=M`, and
//! start days follow the chain described in [`crate::schedule`].
//!
//! ```text
//!            submit()                      validation ok
//! Editing ──────────▶ Validating ─────────────────────────▶ Submitting
//!    ▲                    │ validation failed                    │
//!    ├────────────────────┘                                      │
//!    │                     submitter rejected                    │ accepted
//!    └───────────────────────────────────────────────────────────┤
//!                                                                ▼
//!                                                             Closed
//! ```
//!
//! ## Submodules
//!
//! - [`draft`]: the editable tree and its defaults
//! - [`patch`]: partial updates merged by the update operations
//! - [`phase_ops`]: add, remove and update phases
//! - [`task_ops`]: add, remove and update tasks
//! - [`submit`]: validation and hand-off to a [`SubmitCarePlan`]
//!
//! # Examples
//!
//! ```rust
//! use livery_care_core::editor::{CarePlanEditor, EditorProps, PhasePatch};
//!
//! let mut editor = CarePlanEditor::create(EditorProps::new(7, "Bramble"));
//! editor.add_phase();
//! assert_eq!(editor.program().phases[1].start_day, 15);
//!
//! editor.update_phase(0, PhasePatch::duration(20))?;
//! assert_eq!(editor.program().phases[1].start_day, 21);
//! # Ok::<(), livery_care_core::CarePlanError>(())
//! ```

use jiff::{Zoned, civil::Date};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{CarePlanError, Result},
    models::CarePlan,
    schedule,
};

pub mod draft;
pub mod patch;
pub mod phase_ops;
pub mod submit;
pub mod task_ops;


pub use draft::{PhaseDraft, ProgramDraft, TaskDraft};
pub use patch::{PhasePatch, ProgramPatch, TaskPatch};
pub use submit::SubmitCarePlan;

/// Inputs supplied by whoever opens the editor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorProps {
    pub horse_id: u64,
    pub horse_name: String,
    /// Admins may set a weekly price on staff-managed plans
    #[serde(default)]
    pub is_admin: bool,
    /// Owned by the caller while it awaits a submit
    #[serde(skip)]
    pub is_submitting: bool,
}

impl EditorProps {
    pub fn new(horse_id: u64, horse_name: impl Into<String>) -> Self {
        Self {
            horse_id,
            horse_name: horse_name.into(),
            is_admin: false,
            is_submitting: false,
        }
    }

    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }
}

/// Where the editor is in its submit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Editing,
    Validating,
    Submitting,
    Closed,
}

/// In-memory editor for one care plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarePlanEditor {
    props: EditorProps,
    /// ID of the stored plan being edited, `None` when creating
    source_id: Option<u64>,
    program: ProgramDraft,
    error: Option<String>,
    #[serde(skip)]
    state: EditorState,
}

impl CarePlanEditor {
    /// Opens the editor on a blank program starting today.
    pub fn create(props: EditorProps) -> Self {
        Self::create_starting(props, Zoned::now().date())
    }

    /// Opens the editor on a blank program starting on `start_date`.
    pub fn create_starting(props: EditorProps, start_date: Date) -> Self {
        debug!("Opening care plan editor for horse {}", props.horse_id);
        Self {
            props,
            source_id: None,
            program: ProgramDraft::new(start_date),
            error: None,
            state: EditorState::Editing,
        }
    }

    /// Opens the editor on a copy of an existing plan.
    pub fn edit(props: EditorProps, plan: &CarePlan) -> Self {
        debug!(
            "Opening care plan editor on plan {} for horse {}",
            plan.id, props.horse_id
        );
        Self {
            props,
            source_id: Some(plan.id),
            program: ProgramDraft::from(plan),
            error: None,
            state: EditorState::Editing,
        }
    }

    /// Brings the editor in line with new inputs.
    ///
    /// The tree is rebuilt only when the plan being edited or the target horse
    /// changed; otherwise in-progress edits are kept and only the props are
    /// refreshed. Returns whether the tree was rebuilt.
    pub fn sync(&mut self, props: EditorProps, source: Option<&CarePlan>) -> bool {
        let source_id = source.map(|plan| plan.id);
        if source_id == self.source_id && props.horse_id == self.props.horse_id {
            self.props = props;
            return false;
        }

        *self = match source {
            Some(plan) => Self::edit(props, plan),
            None => Self::create(props),
        };
        true
    }

    /// Discards the editor and everything entered in it.
    pub fn cancel(self) {
        debug!(
            "Discarding care plan editor for horse {} ({} phases)",
            self.props.horse_id,
            self.program.phases.len()
        );
    }

    pub fn program(&self) -> &ProgramDraft {
        &self.program
    }

    pub fn props(&self) -> &EditorProps {
        &self.props
    }

    pub fn source_id(&self) -> Option<u64> {
        self.source_id
    }

    /// Last validation or submit failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn set_submitting(&mut self, is_submitting: bool) {
        self.props.is_submitting = is_submitting;
    }

    /// Refreshes the caller's admin flag without touching the tree.
    pub fn set_admin(&mut self, is_admin: bool) {
        self.props.is_admin = is_admin;
    }

    /// Cancel and submit controls are disabled while a submit is in flight.
    pub fn controls_enabled(&self) -> bool {
        !self.props.is_submitting && self.state != EditorState::Submitting
    }

    /// Whether the weekly price field is shown.
    pub fn price_field_visible(&self) -> bool {
        self.props.is_admin && self.program.staff_managed
    }

    /// Merges program-level fields.
    pub fn update_program(&mut self, patch: ProgramPatch) -> Result<()> {
        if patch.weekly_price.is_some() {
            let staff_managed = patch.staff_managed.unwrap_or(self.program.staff_managed);
            if !(self.props.is_admin && staff_managed) {
                return Err(CarePlanError::invalid_input("weekly_price")
                    .with_reason("only admins can price staff-managed plans"));
            }
        }

        let program = &mut self.program;
        if let Some(name) = patch.name {
            program.name = name;
        }
        if let Some(description) = patch.description {
            program.description = description;
        }
        if let Some(reason) = patch.reason {
            program.reason = reason;
        }
        if let Some(prescribed_by) = patch.prescribed_by {
            program.prescribed_by = prescribed_by;
        }
        if let Some(prescription_date) = patch.prescription_date {
            program.prescription_date = prescription_date;
        }
        if let Some(start_date) = patch.start_date {
            program.start_date = start_date;
        }
        if let Some(expected_end_date) = patch.expected_end_date {
            program.expected_end_date = expected_end_date;
        }
        if let Some(notes) = patch.notes {
            program.notes = notes;
        }
        if let Some(staff_managed) = patch.staff_managed {
            program.staff_managed = staff_managed;
        }
        if let Some(weekly_price) = patch.weekly_price {
            program.weekly_price = weekly_price;
        }
        Ok(())
    }

    /// End date implied by the phase schedule.
    pub fn calculate_end_date(&self) -> Result<Date> {
        let total_days = schedule::total_days(&self.program.phases);
        schedule::end_date(self.program.start_date, total_days)
    }

    /// Explicit end date if one was entered, otherwise the implied one.
    pub fn display_end_date(&self) -> Result<Date> {
        match self.program.expected_end_date {
            Some(date) => Ok(date),
            None => self.calculate_end_date(),
        }
    }

    fn phase_mut(&mut self, index: usize) -> Result<&mut PhaseDraft> {
        self.program
            .phases
            .get_mut(index)
            .ok_or(CarePlanError::PhaseNotFound { index })
    }
}
