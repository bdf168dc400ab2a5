//! Async facade over the care plan store.
//!
//! [`CarePlanner`] wraps the blocking [`Database`](crate::db::Database) API in
//! `spawn_blocking` calls so it can be awaited from async code, and hands out
//! [`PlanSubmitter`]s that plug the store into the editor's submit hook.
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
//!     description: Some("Walk in hand".to_string()),
//!     ..Default::default()
//! })?;
//!
//! let submitter = planner.submitter(None);
//! editor.submit(&submitter).await?;
//! println!("Saved plan {:?}", submitter.saved_id());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{CarePlanError, Result},
};

pub mod builder;
pub mod plan_ops;
pub mod submitter;


pub use builder::CarePlannerBuilder;
pub use submitter::PlanSubmitter;

/// Main interface for storing and loading care plans.
#[derive(Debug, Clone)]
pub struct CarePlanner {
    pub(crate) db_path: PathBuf,
}

impl CarePlanner {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite file backing this planner.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `operation` against a fresh connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, operation: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            operation(&mut db)
        })
        .await
        .map_err(|e| CarePlanError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
