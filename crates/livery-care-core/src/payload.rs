//! Submission payload built from the editor tree.
//!
//! The payload is what leaves the editor on save. Compared to the draft it
//! differs in two ways:
//!
//! - optional text that is empty or whitespace is absent, never `""`
//! - `feed_time` is only present on feed-based tasks, whatever the draft
//!   still remembers
//!
//! # Examples
//!
//! ```rust
//! use livery_care_core::{editor::ProgramDraft, payload::CarePlanPayload};
//! use jiff::civil::date;
//!
//! let mut draft = ProgramDraft::new(date(2024, 1, 1));
//! draft.name = "Tendon rehab".to_string();
//! draft.phases[0].tasks[0].description = "Walk in hand".to_string();
//!
//! let payload = CarePlanPayload::from_draft(7, &draft)?;
//! let json = serde_json::to_value(&payload)?;
//! assert!(json.get("description").is_none());
//! assert!(json["phases"][0]["tasks"][0].get("feed_time").is_none());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    editor::{PhaseDraft, ProgramDraft, TaskDraft},
    error::{CarePlanError, Result},
    models::{FeedTime, Frequency, TaskType},
};

/// A whole care plan ready to be persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CarePlanPayload {
    pub horse_id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prescribed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub prescription_date: Option<Date>,
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub start_date: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub expected_end_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub staff_managed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_price: Option<f64>,
    pub phases: Vec<PhasePayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PhasePayload {
    pub phase_number: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub duration_days: u32,
    pub start_day: u32,
    pub tasks: Vec<TaskPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TaskPayload {
    pub task_type: TaskType,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_needed: Option<String>,
    pub is_feed_based: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_time: Option<FeedTime>,
    pub sequence: u32,
}

/// `None` for empty or whitespace-only text, the text unchanged otherwise.
pub fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parses the price field; empty text means no price.
pub fn parse_weekly_price(value: &str) -> Result<Option<f64>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(Some(price)),
        _ => Err(CarePlanError::invalid_input("weekly_price")
            .with_reason(format!("'{trimmed}' is not a valid price"))),
    }
}

impl CarePlanPayload {
    /// Normalizes `draft` into a payload for `horse_id`.
    ///
    /// # Errors
    ///
    /// Returns `CarePlanError::InvalidInput` if a staff-managed plan carries a
    /// price that does not parse.
    pub fn from_draft(horse_id: u64, draft: &ProgramDraft) -> Result<Self> {
        let weekly_price = if draft.staff_managed {
            parse_weekly_price(&draft.weekly_price)?
        } else {
            None
        };

        Ok(Self {
            horse_id,
            name: draft.name.clone(),
            description: non_empty(&draft.description),
            reason: non_empty(&draft.reason),
            prescribed_by: non_empty(&draft.prescribed_by),
            prescription_date: draft.prescription_date,
            start_date: draft.start_date,
            expected_end_date: draft.expected_end_date,
            notes: non_empty(&draft.notes),
            staff_managed: draft.staff_managed,
            weekly_price,
            phases: draft.phases.iter().map(PhasePayload::from).collect(),
        })
    }
}

impl From<&PhaseDraft> for PhasePayload {
    fn from(phase: &PhaseDraft) -> Self {
        Self {
            phase_number: phase.phase_number,
            name: phase.name.clone(),
            description: non_empty(&phase.description),
            duration_days: phase.duration_days,
            start_day: phase.start_day,
            tasks: phase.tasks.iter().map(TaskPayload::from).collect(),
        }
    }
}

impl From<&TaskDraft> for TaskPayload {
    fn from(task: &TaskDraft) -> Self {
        let feeding = task.feeding();
        Self {
            task_type: task.task_type,
            description: task.description.clone(),
            duration_minutes: task.duration_minutes,
            frequency: task.frequency,
            instructions: non_empty(&task.instructions),
            equipment_needed: non_empty(&task.equipment_needed),
            is_feed_based: feeding.is_feed_based(),
            feed_time: feeding.feed_time(),
            sequence: task.sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use serde_json::json;

    use super::*;

    fn filled_draft() -> ProgramDraft {
        let mut draft = ProgramDraft::new(date(2024, 3, 4));
        draft.name = "Suspensory rehab".to_string();
        draft.phases[0].tasks[0].description = "Walk in hand".to_string();
        draft
    }

    #[test]
    fn test_empty_optional_text_is_absent() {
        let mut draft = filled_draft();
        draft.description = "   ".to_string();
        draft.notes = String::new();
        draft.phases[0].tasks[0].instructions = "\n".to_string();

        let value = serde_json::to_value(CarePlanPayload::from_draft(3, &draft).unwrap()).unwrap();

        for key in ["description", "reason", "prescribed_by", "notes", "weekly_price"] {
            assert!(value.get(key).is_none(), "{key} should be absent");
        }
        let task = &value["phases"][0]["tasks"][0];
        assert!(task.get("instructions").is_none());
        assert!(task.get("equipment_needed").is_none());
        assert!(task.get("duration_minutes").is_none());
    }

    #[test]
    fn test_present_text_is_kept() {
        let mut draft = filled_draft();
        draft.reason = "Left fore suspensory strain".to_string();
        draft.phases[0].description = "Box rest with hand walking".to_string();

        let payload = CarePlanPayload::from_draft(3, &draft).unwrap();
        assert_eq!(payload.reason.as_deref(), Some("Left fore suspensory strain"));
        assert_eq!(
            payload.phases[0].description.as_deref(),
            Some("Box rest with hand walking")
        );
    }

    #[test]
    fn test_feed_time_only_for_feed_based_tasks() {
        let mut draft = filled_draft();
        let task = &mut draft.phases[0].tasks[0];
        task.task_type = TaskType::Medication;
        task.feed_time = FeedTime::Evening;

        task.is_feed_based = true;
        let on = serde_json::to_value(CarePlanPayload::from_draft(1, &draft).unwrap()).unwrap();
        assert_eq!(on["phases"][0]["tasks"][0]["feed_time"], json!("evening"));

        draft.phases[0].tasks[0].is_feed_based = false;
        let off = serde_json::to_value(CarePlanPayload::from_draft(1, &draft).unwrap()).unwrap();
        assert!(off["phases"][0]["tasks"][0].get("feed_time").is_none());
        assert_eq!(off["phases"][0]["tasks"][0]["is_feed_based"], json!(false));
    }

    #[test]
    fn test_price_only_for_staff_managed_plans() {
        let mut draft = filled_draft();
        draft.weekly_price = "85.50".to_string();

        let payload = CarePlanPayload::from_draft(1, &draft).unwrap();
        assert_eq!(payload.weekly_price, None);

        draft.staff_managed = true;
        let payload = CarePlanPayload::from_draft(1, &draft).unwrap();
        assert_eq!(payload.weekly_price, Some(85.5));
    }

    #[test]
    fn test_invalid_price_is_rejected() {
        assert!(parse_weekly_price("-3").is_err());
        assert!(parse_weekly_price("abc").is_err());
        assert_eq!(parse_weekly_price(" ").unwrap(), None);
        assert_eq!(parse_weekly_price("40").unwrap(), Some(40.0));
    }

    #[test]
    fn test_dates_serialize_as_iso() {
        let mut draft = filled_draft();
        draft.expected_end_date = Some(date(2024, 4, 1));

        let value = serde_json::to_value(CarePlanPayload::from_draft(1, &draft).unwrap()).unwrap();
        assert_eq!(value["start_date"], json!("2024-03-04"));
        assert_eq!(value["expected_end_date"], json!("2024-04-01"));
        assert!(value.get("prescription_date").is_none());
    }
}
