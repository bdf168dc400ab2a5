//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::CarePlan;

/// Outcome of storing a new plan.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<CarePlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created care plan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Outcome of replacing a plan or changing its status.
///
/// Optionally lists the changes that were made.
///
/// # Examples
///
/// ```rust
/// use livery_care_core::{display::UpdateResult, models::{CarePlan, PlanStatus}};
/// use jiff::{Timestamp, civil::date};
///
/// let plan = CarePlan {
///     id: 3,
///     horse_id: 7,
///     name: "Tendon rehab".to_string(),
///     description: None,
///     reason: None,
///     prescribed_by: None,
///     prescription_date: None,
///     start_date: date(2024, 1, 1),
///     expected_end_date: None,
///     notes: None,
///     staff_managed: false,
///     weekly_price: None,
///     status: PlanStatus::Completed,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
///     phases: vec![],
/// };
///
/// let result = UpdateResult::with_changes(plan, vec!["Status set to completed".to_string()]);
/// assert!(result.to_string().contains("Changes made:"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<CarePlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated care plan with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Confirmation of a permanent delete.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<CarePlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted care plan '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}
