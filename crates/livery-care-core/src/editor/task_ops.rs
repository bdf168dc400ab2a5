//! Task operations for the editor.

use log::debug;

use super::{CarePlanEditor, TaskDraft, TaskPatch};
use crate::{
    error::{CarePlanError, Result},
    schedule,
};

impl CarePlanEditor {
    /// Appends a default task to the phase at `phase_index`.
    pub fn add_task(&mut self, phase_index: usize) -> Result<()> {
        let phase = self.phase_mut(phase_index)?;
        let sequence = phase.tasks.len() as u32 + 1;
        phase.tasks.push(TaskDraft::with_sequence(sequence));
        debug!("Added task {sequence} to phase {}", phase.phase_number);
        Ok(())
    }

    /// Removes a task and renumbers the rest of the phase.
    ///
    /// A phase always keeps at least one task; removing the last one is a
    /// no-op.
    pub fn remove_task(&mut self, phase_index: usize, task_index: usize) -> Result<()> {
        let phase = self.phase_mut(phase_index)?;
        if task_index >= phase.tasks.len() {
            return Err(CarePlanError::TaskNotFound {
                phase_index,
                task_index,
            });
        }
        if phase.tasks.len() == 1 {
            debug!("Ignoring removal of the only task in phase {}", phase.phase_number);
            return Ok(());
        }

        phase.tasks.remove(task_index);
        schedule::renumber_tasks(phase);
        Ok(())
    }

    /// Merges `patch` into a single task.
    pub fn update_task(
        &mut self,
        phase_index: usize,
        task_index: usize,
        patch: TaskPatch,
    ) -> Result<()> {
        if patch.duration_minutes == Some(Some(0)) {
            return Err(CarePlanError::invalid_input("duration_minutes")
                .with_reason("must be a positive number of minutes"));
        }

        let phase = self.phase_mut(phase_index)?;
        let task = phase
            .tasks
            .get_mut(task_index)
            .ok_or(CarePlanError::TaskNotFound {
                phase_index,
                task_index,
            })?;

        if let Some(task_type) = patch.task_type {
            task.task_type = task_type;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(duration_minutes) = patch.duration_minutes {
            task.duration_minutes = duration_minutes;
        }
        if let Some(frequency) = patch.frequency {
            task.frequency = frequency;
        }
        if let Some(instructions) = patch.instructions {
            task.instructions = instructions;
        }
        if let Some(equipment_needed) = patch.equipment_needed {
            task.equipment_needed = equipment_needed;
        }
        if let Some(is_feed_based) = patch.is_feed_based {
            task.is_feed_based = is_feed_based;
        }
        if let Some(feed_time) = patch.feed_time {
            task.feed_time = feed_time;
        }
        Ok(())
    }
}
