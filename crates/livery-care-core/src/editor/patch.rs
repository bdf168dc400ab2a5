//! Partial updates merged into the editor tree.
//!
//! Every field is optional; `None` leaves the current value untouched, so a
//! default patch is a no-op. Fields that can themselves be cleared use a
//! nested `Option`, where `Some(None)` clears the value.

use jiff::civil::Date;

use crate::models::{FeedTime, Frequency, TaskType};

/// Changes to program-level fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgramPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub reason: Option<String>,
    pub prescribed_by: Option<String>,
    pub prescription_date: Option<Option<Date>>,
    pub start_date: Option<Date>,
    pub expected_end_date: Option<Option<Date>>,
    pub notes: Option<String>,
    pub staff_managed: Option<bool>,
    pub weekly_price: Option<String>,
}

/// Changes to a single phase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhasePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration_days: Option<u32>,
    /// Manual override; ignored for the first phase
    pub start_day: Option<u32>,
}

/// Changes to a single task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub task_type: Option<TaskType>,
    pub description: Option<String>,
    pub duration_minutes: Option<Option<u32>>,
    pub frequency: Option<Frequency>,
    pub instructions: Option<String>,
    pub equipment_needed: Option<String>,
    pub is_feed_based: Option<bool>,
    pub feed_time: Option<FeedTime>,
}

impl ProgramPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl PhasePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Patch that only changes the phase length.
    pub fn duration(days: u32) -> Self {
        Self {
            duration_days: Some(days),
            ..Default::default()
        }
    }
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
