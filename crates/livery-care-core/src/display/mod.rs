//! Markdown formatting for care plans, drafts and operation results.
//!
//! Stored models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds wrapper types for contexts that need more than the model
//! itself: collections, operation outcomes, and the live editor view.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Models/Editor  │    │ Wrapper Types   │    │   Markdown      │
//! │ (CarePlan, ...) │───▶│ (DraftView ...) │───▶│   Output        │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: collection wrapper types ([`CarePlanSummaries`])
//! - [`draft`]: the editor view ([`DraftView`])
//! - [`results`]: operation results ([`CreateResult`], [`UpdateResult`],
//!   [`DeleteResult`])
//! - [`status`]: status and confirmation messages ([`OperationStatus`])
//! - [`datetime`]: timestamp formatting
//! - [`models`]: Display implementations for stored models
//!
//! # Examples
//!
//! ```rust
//! use livery_care_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Draft discarded".to_string());
//! assert_eq!(status.to_string(), "Success: Draft discarded\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod draft;
pub mod models;
pub mod results;
pub mod status;

pub use collections::CarePlanSummaries;
pub use datetime::LocalDateTime;
pub use draft::DraftView;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
