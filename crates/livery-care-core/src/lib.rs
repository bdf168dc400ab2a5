//! Core library for the Livery Care plan editor.
//!
//! This crate holds the business logic for building and storing rehabilitation
//! care plans for horses: an ordered list of phases, each with a duration in
//! days and a list of recurring tasks.
//!
//! # Layers
//!
//! - **Editor** ([`editor`]): the in-memory phase/task tree and every
//!   operation that mutates it. Start days are kept chained by
//!   [`schedule`].
//! - **Payload** ([`payload`]): the normalized shape handed to a submit hook.
//! - **Storage** ([`db`], [`planner`]): SQLite persistence behind an async
//!   facade.
//! - **Display** ([`display`]): markdown formatting for terminal output.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use livery_care_core::{
//!     CarePlannerBuilder,
//!     editor::{CarePlanEditor, EditorProps, ProgramPatch, TaskPatch},
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = CarePlannerBuilder::new()
//!     .with_database_path(Some("care.db"))
//!     .build()
//!     .await?;
//!
//! let mut editor = CarePlanEditor::create(EditorProps::new(7, "Bramble"));
//! editor.update_program(ProgramPatch {
//!     name: Some("Tendon rehab".to_string()),
//!     ..Default::default()
//! })?;
//! editor.update_task(0, 0, TaskPatch {
//!     description: Some("Hand walk 10 minutes".to_string()),
//!     ..Default::default()
//! })?;
//!
//! let submitter = planner.submitter(None);
//! editor.submit(&submitter).await?;
//! println!("Saved plan {:?}", submitter.saved_id());
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod editor;
pub mod error;
pub mod models;
pub mod payload;
pub mod planner;
pub mod schedule;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CarePlanSummaries, CreateResult, DeleteResult, DraftView, LocalDateTime, OperationStatus,
    UpdateResult,
};
pub use editor::{
    CarePlanEditor, EditorProps, EditorState, PhaseDraft, PhasePatch, ProgramDraft, ProgramPatch,
    SubmitCarePlan, TaskDraft, TaskPatch,
};
pub use error::{CarePlanError, Result};
pub use models::{
    CarePhase, CarePlan, CarePlanSummary, CareTask, FeedTime, Feeding, Frequency, PlanStatus,
    TaskType,
};
pub use payload::{CarePlanPayload, PhasePayload, TaskPayload};
pub use planner::{CarePlanner, CarePlannerBuilder, PlanSubmitter};
