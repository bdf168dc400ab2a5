//! Phase operations for the editor.

use log::debug;

use super::{CarePlanEditor, PhaseDraft, PhasePatch};
use crate::{
    error::{CarePlanError, Result},
    schedule,
};

impl CarePlanEditor {
    /// Appends a default phase that starts the day after the last one ends.
    pub fn add_phase(&mut self) {
        let phases = &mut self.program.phases;
        let number = phases.len() as u32 + 1;
        let start_day = schedule::next_start_day(phases);
        phases.push(PhaseDraft::numbered(number, start_day));
        debug!("Added phase {number} starting on day {start_day}");
    }

    /// Removes the phase at `index`, then renumbers and re-chains the rest.
    ///
    /// A program always keeps at least one phase; removing the last one is a
    /// no-op.
    pub fn remove_phase(&mut self, index: usize) -> Result<()> {
        let phases = &mut self.program.phases;
        if index >= phases.len() {
            return Err(CarePlanError::PhaseNotFound { index });
        }
        if phases.len() == 1 {
            debug!("Ignoring removal of the only phase");
            return Ok(());
        }

        phases.remove(index);
        schedule::renumber_phases(phases);
        schedule::rebuild_chain(phases);
        debug!("Removed phase at index {index}, {} remain", phases.len());
        Ok(())
    }

    /// Merges `patch` into the phase at `index`.
    ///
    /// A duration change re-chains every later phase. Earlier phases, and the
    /// first phase's start day, are never touched.
    pub fn update_phase(&mut self, index: usize, patch: PhasePatch) -> Result<()> {
        if patch.duration_days == Some(0) {
            return Err(CarePlanError::invalid_input("duration_days")
                .with_reason("a phase must last at least one day"));
        }
        if patch.start_day == Some(0) {
            return Err(CarePlanError::invalid_input("start_day")
                .with_reason("days are counted from 1"));
        }

        let phase = self.phase_mut(index)?;
        if let Some(name) = patch.name {
            phase.name = name;
        }
        if let Some(description) = patch.description {
            phase.description = description;
        }
        if let Some(start_day) = patch.start_day {
            if index == 0 {
                debug!("Ignoring start day override for the first phase");
            } else {
                phase.start_day = start_day;
            }
        }
        if let Some(duration_days) = patch.duration_days {
            phase.duration_days = duration_days;
            schedule::chain_start_days_after(&mut self.program.phases, index);
        }
        Ok(())
    }
}
