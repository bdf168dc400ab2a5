//! Data models for stored care plans.
//!
//! These are the shapes a care plan has once it has been saved: optional text
//! is `None` rather than empty, and every plan carries its identity and
//! timestamps. The editable, form-shaped counterparts live in
//! [`crate::editor`]. Display implementations are in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use livery_care_core::models::{CarePhase, CarePlan, PlanStatus};
//! use jiff::{Timestamp, civil::date};
//!
//! let plan = CarePlan {
//!     id: 1,
//!     horse_id: 7,
//!     name: "Tendon rehab".to_string(),
//!     description: None,
//! #   reason: None,
//! #   prescribed_by: None,
//! #   prescription_date: None,
//!     start_date: date(2024, 1, 1),
//! #   expected_end_date: None,
//! #   notes: None,
//! #   staff_managed: false,
//! #   weekly_price: None,
//! #   status: PlanStatus::Active,
//! #   created_at: Timestamp::now(),
//! #   updated_at: Timestamp::now(),
//!     phases: vec![CarePhase {
//!         phase_number: 1,
//!         name: "Box rest".to_string(),
//!         description: None,
//!         duration_days: 14,
//!         start_day: 1,
//!         tasks: vec![],
//!     }],
//! };
//! assert_eq!(plan.total_days(), 14);
//! ```

pub mod care_plan;
pub mod kinds;
pub mod summary;

#[cfg(test)]
mod tests;

pub use care_plan::{CarePhase, CarePlan, CareTask};
pub use kinds::{FeedTime, Feeding, Frequency, PlanStatus, TaskType};
pub use summary::CarePlanSummary;
