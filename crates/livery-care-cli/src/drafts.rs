//! Draft persistence between CLI invocations.
//!
//! Each command is a separate process, so the open editor is serialized to a
//! JSON file after every change and read back by the next command.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use livery_care_core::CarePlanEditor;
use log::debug;

/// JSON file holding the editor between commands.
pub struct DraftStore {
    path: PathBuf,
}

impl DraftStore {
    /// Uses `path`, or `$XDG_DATA_HOME/livery-care/draft.json` when `None`.
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => xdg::BaseDirectories::with_prefix("livery-care")
                .place_data_file("draft.json")
                .context("Failed to resolve the default draft file")?,
        };
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the open draft.
    pub fn load(&self) -> Result<CarePlanEditor> {
        if !self.exists() {
            bail!("No draft is open. Start one with `lc draft new` or `lc draft edit <id>`");
        }
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read draft file {}", self.path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Draft file {} is corrupt", self.path.display()))
    }

    pub fn save(&self, editor: &CarePlanEditor) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(editor).context("Failed to serialize draft")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write draft file {}", self.path.display()))?;
        debug!("Saved draft to {}", self.path.display());
        Ok(())
    }

    /// Removes the draft file if there is one.
    pub fn discard(&self) -> Result<()> {
        if self.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove draft file {}", self.path.display()))?;
            debug!("Removed draft {}", self.path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use livery_care_core::{EditorProps, PhasePatch};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = DraftStore::new(Some(temp_dir.path().join("nested/draft.json"))).unwrap();
        assert!(store.load().is_err());

        let mut editor =
            CarePlanEditor::create_starting(EditorProps::new(3, "Moss"), date(2024, 7, 1));
        editor.add_phase();
        editor.update_phase(0, PhasePatch::duration(5)).unwrap();
        store.save(&editor).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.program(), editor.program());
        assert_eq!(loaded.program().phases[1].start_day, 6);

        store.discard().unwrap();
        assert!(!store.exists());
        store.discard().unwrap();
    }
}
