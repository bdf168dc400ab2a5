//! Care plan summary types.

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};

use super::{CarePlan, PlanStatus};

/// Summary information about a care plan for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarePlanSummary {
    pub id: u64,
    pub horse_id: u64,
    pub name: String,
    pub status: PlanStatus,
    pub start_date: Date,
    /// Explicit end date, or the one implied by the phase schedule
    pub end_date: Option<Date>,
    pub total_phases: u32,
    pub total_tasks: u32,
    pub staff_managed: bool,
    pub updated_at: Timestamp,
}

impl From<&CarePlan> for CarePlanSummary {
    fn from(plan: &CarePlan) -> Self {
        let implied_end = match plan.total_days() {
            0 => None,
            days => crate::schedule::end_date(plan.start_date, days).ok(),
        };

        Self {
            id: plan.id,
            horse_id: plan.horse_id,
            name: plan.name.clone(),
            status: plan.status,
            start_date: plan.start_date,
            end_date: plan.expected_end_date.or(implied_end),
            total_phases: plan.phases.len() as u32,
            total_tasks: plan.phases.iter().map(|phase| phase.tasks.len() as u32).sum(),
            staff_managed: plan.staff_managed,
            updated_at: plan.updated_at,
        }
    }
}
