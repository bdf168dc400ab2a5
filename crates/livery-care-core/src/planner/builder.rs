//! Builder for creating and configuring CarePlanner instances.

use std::path::{Path, PathBuf};

use super::CarePlanner;
use crate::error::{CarePlanError, Result};

/// Builder for creating and configuring CarePlanner instances.
#[derive(Debug, Clone, Default)]
pub struct CarePlannerBuilder {
    database_path: Option<PathBuf>,
}

impl CarePlannerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/livery-care/livery-care.db` or
    /// `~/.local/share/livery-care/livery-care.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the planner, creating the database file and schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `CarePlanError::FileSystem` if the database directory cannot
    /// be created, `CarePlanError::Database` if initialization fails
    pub async fn build(self) -> Result<CarePlanner> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| CarePlanError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let planner = CarePlanner::new(db_path);
        planner.with_database(|_db| Ok(())).await?;
        Ok(planner)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("livery-care")
            .place_data_file("livery-care.db")
            .map_err(|e| CarePlanError::XdgDirectory(e.to_string()))
    }
}
