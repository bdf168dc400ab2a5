//! Form-shaped editor state.
//!
//! Optional text is held as a plain `String` where empty means "not given",
//! mirroring what a form field holds. Conversion to the absent-if-empty shape
//! happens in [`crate::payload`].

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::{CarePhase, CarePlan, CareTask, FeedTime, Feeding, Frequency, TaskType};

/// Default length of a newly added phase.
pub const DEFAULT_PHASE_DAYS: u32 = 14;

/// Editable program: the root of the phase/task tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgramDraft {
    pub name: String,
    pub description: String,
    pub reason: String,
    pub prescribed_by: String,
    pub prescription_date: Option<Date>,
    pub start_date: Date,
    pub expected_end_date: Option<Date>,
    pub notes: String,
    pub staff_managed: bool,
    /// Decimal text as typed into the price field
    pub weekly_price: String,
    pub phases: Vec<PhaseDraft>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhaseDraft {
    pub phase_number: u32,
    pub name: String,
    pub description: String,
    pub duration_days: u32,
    pub start_day: u32,
    pub tasks: Vec<TaskDraft>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskDraft {
    pub task_type: TaskType,
    pub description: String,
    pub duration_minutes: Option<u32>,
    pub frequency: Frequency,
    pub instructions: String,
    pub equipment_needed: String,
    pub is_feed_based: bool,
    /// Kept while `is_feed_based` is off so the choice survives a toggle
    pub feed_time: FeedTime,
    pub sequence: u32,
}

impl ProgramDraft {
    /// Blank program starting on `start_date` with one default phase.
    pub fn new(start_date: Date) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            reason: String::new(),
            prescribed_by: String::new(),
            prescription_date: None,
            start_date,
            expected_end_date: None,
            notes: String::new(),
            staff_managed: false,
            weekly_price: String::new(),
            phases: vec![PhaseDraft::numbered(1, 1)],
        }
    }

    /// Number of tasks across all phases.
    pub fn task_count(&self) -> usize {
        self.phases.iter().map(|phase| phase.tasks.len()).sum()
    }
}

impl PhaseDraft {
    /// Default phase `number` starting on `start_day` with one default task.
    pub fn numbered(number: u32, start_day: u32) -> Self {
        Self {
            phase_number: number,
            name: format!("Phase {number}"),
            description: String::new(),
            duration_days: DEFAULT_PHASE_DAYS,
            start_day,
            tasks: vec![TaskDraft::with_sequence(1)],
        }
    }

    /// Last program day covered by this phase.
    pub fn end_day(&self) -> u32 {
        self.start_day.saturating_add(self.duration_days).saturating_sub(1)
    }
}

impl TaskDraft {
    /// Default exercise task at position `sequence`.
    pub fn with_sequence(sequence: u32) -> Self {
        Self {
            task_type: TaskType::Exercise,
            description: String::new(),
            duration_minutes: None,
            frequency: Frequency::Daily,
            instructions: String::new(),
            equipment_needed: String::new(),
            is_feed_based: false,
            feed_time: FeedTime::Morning,
            sequence,
        }
    }

    pub fn feeding(&self) -> Feeding {
        Feeding::from_parts(self.is_feed_based, self.feed_time)
    }
}

impl From<&CarePlan> for ProgramDraft {
    fn from(plan: &CarePlan) -> Self {
        let phases = if plan.phases.is_empty() {
            vec![PhaseDraft::numbered(1, 1)]
        } else {
            plan.phases.iter().map(PhaseDraft::from).collect()
        };

        Self {
            name: plan.name.clone(),
            description: plan.description.clone().unwrap_or_default(),
            reason: plan.reason.clone().unwrap_or_default(),
            prescribed_by: plan.prescribed_by.clone().unwrap_or_default(),
            prescription_date: plan.prescription_date,
            start_date: plan.start_date,
            expected_end_date: plan.expected_end_date,
            notes: plan.notes.clone().unwrap_or_default(),
            staff_managed: plan.staff_managed,
            weekly_price: plan
                .weekly_price
                .map(|price| price.to_string())
                .unwrap_or_default(),
            phases,
        }
    }
}

impl From<&CarePhase> for PhaseDraft {
    fn from(phase: &CarePhase) -> Self {
        let tasks = if phase.tasks.is_empty() {
            vec![TaskDraft::with_sequence(1)]
        } else {
            phase.tasks.iter().map(TaskDraft::from).collect()
        };

        Self {
            phase_number: phase.phase_number,
            name: phase.name.clone(),
            description: phase.description.clone().unwrap_or_default(),
            duration_days: phase.duration_days,
            start_day: phase.start_day,
            tasks,
        }
    }
}

impl From<&CareTask> for TaskDraft {
    fn from(task: &CareTask) -> Self {
        Self {
            task_type: task.task_type,
            description: task.description.clone(),
            duration_minutes: task.duration_minutes,
            frequency: task.frequency,
            instructions: task.instructions.clone().unwrap_or_default(),
            equipment_needed: task.equipment_needed.clone().unwrap_or_default(),
            is_feed_based: task.is_feed_based,
            feed_time: task.feed_time.unwrap_or_default(),
            sequence: task.sequence,
        }
    }
}
