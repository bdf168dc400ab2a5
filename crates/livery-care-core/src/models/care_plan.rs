//! Stored care plan definitions.

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};

use super::{FeedTime, Frequency, PlanStatus, TaskType};

/// A rehabilitation program as persisted for one horse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarePlan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Horse the plan was prescribed for
    pub horse_id: u64,

    pub name: String,
    pub description: Option<String>,

    /// Why the plan was prescribed (injury, surgery, ...)
    pub reason: Option<String>,

    /// Vet or therapist who prescribed the plan
    pub prescribed_by: Option<String>,
    pub prescription_date: Option<Date>,

    pub start_date: Date,
    pub expected_end_date: Option<Date>,
    pub notes: Option<String>,

    /// Whether yard staff carry out the tasks
    #[serde(default)]
    pub staff_managed: bool,

    /// Weekly charge for staff-managed plans
    pub weekly_price: Option<f64>,

    #[serde(default)]
    pub status: PlanStatus,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,

    #[serde(default)]
    pub phases: Vec<CarePhase>,
}

/// A stored phase of a care plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarePhase {
    pub phase_number: u32,
    pub name: String,
    pub description: Option<String>,
    pub duration_days: u32,
    pub start_day: u32,

    /// Tasks may be missing when a phase was stored without any
    #[serde(default)]
    pub tasks: Vec<CareTask>,
}

/// A stored task within a phase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareTask {
    pub task_type: TaskType,
    pub description: String,
    pub duration_minutes: Option<u32>,
    pub frequency: Frequency,
    pub instructions: Option<String>,
    pub equipment_needed: Option<String>,
    #[serde(default)]
    pub is_feed_based: bool,
    pub feed_time: Option<FeedTime>,
    pub sequence: u32,
}

impl CarePlan {
    /// Last day of the program counted from `start_day` 1.
    pub fn total_days(&self) -> u32 {
        self.phases
            .last()
            .map(|phase| {
                phase
                    .start_day
                    .saturating_add(phase.duration_days)
                    .saturating_sub(1)
            })
            .unwrap_or(0)
    }
}
