//! Phase and task rows belonging to a care plan.

use rusqlite::{Connection, params};

use super::utils::{parse_optional_text, parse_text};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{CarePhase, CareTask},
    payload::PhasePayload,
};

const INSERT_PHASE_SQL: &str = "INSERT INTO care_phases (plan_id, phase_number, name, description, duration_days, start_day) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const INSERT_TASK_SQL: &str = "INSERT INTO care_tasks (phase_id, task_type, description, duration_minutes, frequency, instructions, equipment_needed, is_feed_based, feed_time, sequence) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const DELETE_PHASES_SQL: &str = "DELETE FROM care_phases WHERE plan_id = ?1";
const SELECT_PHASES_SQL: &str = "SELECT id, phase_number, name, description, duration_days, start_day FROM care_phases WHERE plan_id = ?1 ORDER BY phase_number";
const SELECT_TASKS_SQL: &str = "SELECT task_type, description, duration_minutes, frequency, instructions, equipment_needed, is_feed_based, feed_time, sequence FROM care_tasks WHERE phase_id = ?1 ORDER BY sequence";

impl super::Database {
    /// Writes `phases` and their tasks under `plan_id`.
    ///
    /// Takes a bare connection so it can run inside the caller's transaction.
    pub(super) fn insert_phases(
        connection: &Connection,
        plan_id: u64,
        phases: &[PhasePayload],
    ) -> Result<()> {
        let mut phase_stmt = connection
            .prepare_cached(INSERT_PHASE_SQL)
            .db_context("Failed to prepare phase insert")?;
        let mut task_stmt = connection
            .prepare_cached(INSERT_TASK_SQL)
            .db_context("Failed to prepare task insert")?;

        for phase in phases {
            phase_stmt
                .execute(params![
                    plan_id as i64,
                    phase.phase_number,
                    phase.name,
                    phase.description,
                    phase.duration_days,
                    phase.start_day,
                ])
                .db_context("Failed to insert phase")?;
            let phase_id = connection.last_insert_rowid();

            for task in &phase.tasks {
                task_stmt
                    .execute(params![
                        phase_id,
                        task.task_type.as_str(),
                        task.description,
                        task.duration_minutes,
                        task.frequency.as_str(),
                        task.instructions,
                        task.equipment_needed,
                        task.is_feed_based,
                        task.feed_time.map(|time| time.as_str()),
                        task.sequence,
                    ])
                    .db_context("Failed to insert task")?;
            }
        }

        Ok(())
    }

    /// Removes every phase (and, by cascade, task) of `plan_id`.
    pub(super) fn delete_phases(connection: &Connection, plan_id: u64) -> Result<()> {
        connection
            .execute(DELETE_PHASES_SQL, params![plan_id as i64])
            .db_context("Failed to delete phases")?;
        Ok(())
    }

    /// Loads the ordered phases of a plan with their ordered tasks.
    pub(super) fn load_phases(&self, plan_id: u64) -> Result<Vec<CarePhase>> {
        let mut stmt = self
            .connection
            .prepare_cached(SELECT_PHASES_SQL)
            .db_context("Failed to prepare phase query")?;

        let rows: Vec<(i64, CarePhase)> = stmt
            .query_map(params![plan_id as i64], |row| {
                Ok((
                    row.get(0)?,
                    CarePhase {
                        phase_number: row.get(1)?,
                        name: row.get(2)?,
                        description: row.get(3)?,
                        duration_days: row.get(4)?,
                        start_day: row.get(5)?,
                        tasks: Vec::new(),
                    },
                ))
            })
            .db_context("Failed to query phases")?
            .collect::<std::result::Result<_, _>>()
            .db_context("Failed to fetch phases")?;

        rows.into_iter()
            .map(|(phase_id, mut phase)| {
                phase.tasks = self.load_tasks(phase_id)?;
                Ok(phase)
            })
            .collect()
    }

    fn load_tasks(&self, phase_id: i64) -> Result<Vec<CareTask>> {
        let mut stmt = self
            .connection
            .prepare_cached(SELECT_TASKS_SQL)
            .db_context("Failed to prepare task query")?;

        stmt.query_map(params![phase_id], |row| {
            Ok(CareTask {
                task_type: parse_text(row, 0)?,
                description: row.get(1)?,
                duration_minutes: row.get(2)?,
                frequency: parse_text(row, 3)?,
                instructions: row.get(4)?,
                equipment_needed: row.get(5)?,
                is_feed_based: row.get(6)?,
                feed_time: parse_optional_text(row, 7)?,
                sequence: row.get(8)?,
            })
        })
        .db_context("Failed to query tasks")?
        .collect::<std::result::Result<_, _>>()
        .db_context("Failed to fetch tasks")
    }
}
