//! Care plan CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, Row, params};

use super::utils::{parse_optional_text, parse_text};
use crate::{
    error::{CarePlanError, DatabaseResultExt, Result},
    models::{CarePlan, PlanStatus},
    payload::CarePlanPayload,
};

const INSERT_PLAN_SQL: &str = "INSERT INTO care_plans (horse_id, name, description, reason, prescribed_by, prescription_date, start_date, expected_end_date, notes, staff_managed, weekly_price, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)";
const UPDATE_PLAN_SQL: &str = "UPDATE care_plans SET horse_id = ?1, name = ?2, description = ?3, reason = ?4, prescribed_by = ?5, prescription_date = ?6, start_date = ?7, expected_end_date = ?8, notes = ?9, staff_managed = ?10, weekly_price = ?11, updated_at = ?12 WHERE id = ?13";
const PLAN_COLUMNS: &str = "id, horse_id, name, description, reason, prescribed_by, prescription_date, start_date, expected_end_date, notes, staff_managed, weekly_price, status, created_at, updated_at";
const UPDATE_STATUS_SQL: &str = "UPDATE care_plans SET status = ?1, updated_at = ?2 WHERE id = ?3";
const DELETE_PLAN_SQL: &str = "DELETE FROM care_plans WHERE id = ?1";

impl super::Database {
    fn build_plan_from_row(row: &Row) -> rusqlite::Result<CarePlan> {
        Ok(CarePlan {
            id: row.get::<_, i64>(0)? as u64,
            horse_id: row.get::<_, i64>(1)? as u64,
            name: row.get(2)?,
            description: row.get(3)?,
            reason: row.get(4)?,
            prescribed_by: row.get(5)?,
            prescription_date: parse_optional_text(row, 6)?,
            start_date: parse_text(row, 7)?,
            expected_end_date: parse_optional_text(row, 8)?,
            notes: row.get(9)?,
            staff_managed: row.get(10)?,
            weekly_price: row.get(11)?,
            status: parse_text::<PlanStatus>(row, 12)?,
            created_at: parse_text::<Timestamp>(row, 13)?,
            updated_at: parse_text::<Timestamp>(row, 14)?,
            phases: Vec::new(),
        })
    }

    /// Stores a new care plan with all of its phases and tasks.
    pub fn create_care_plan(&mut self, payload: &CarePlanPayload) -> Result<CarePlan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        tx.execute(
            INSERT_PLAN_SQL,
            params![
                payload.horse_id as i64,
                payload.name,
                payload.description,
                payload.reason,
                payload.prescribed_by,
                payload.prescription_date.map(|date| date.to_string()),
                payload.start_date.to_string(),
                payload.expected_end_date.map(|date| date.to_string()),
                payload.notes,
                payload.staff_managed,
                payload.weekly_price,
                PlanStatus::Active.as_str(),
                &now,
                &now,
            ],
        )
        .db_context("Failed to insert care plan")?;
        let id = tx.last_insert_rowid() as u64;

        Self::insert_phases(&tx, id, &payload.phases)?;
        tx.commit().db_context("Failed to commit transaction")?;

        self.get_care_plan(id)?
            .ok_or(CarePlanError::PlanNotFound { id })
    }

    /// Replaces an existing plan's fields and its whole phase tree.
    pub fn replace_care_plan(&mut self, id: u64, payload: &CarePlanPayload) -> Result<CarePlan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let updated = tx
            .execute(
                UPDATE_PLAN_SQL,
                params![
                    payload.horse_id as i64,
                    payload.name,
                    payload.description,
                    payload.reason,
                    payload.prescribed_by,
                    payload.prescription_date.map(|date| date.to_string()),
                    payload.start_date.to_string(),
                    payload.expected_end_date.map(|date| date.to_string()),
                    payload.notes,
                    payload.staff_managed,
                    payload.weekly_price,
                    Timestamp::now().to_string(),
                    id as i64,
                ],
            )
            .db_context("Failed to update care plan")?;
        if updated == 0 {
            return Err(CarePlanError::PlanNotFound { id });
        }

        Self::delete_phases(&tx, id)?;
        Self::insert_phases(&tx, id, &payload.phases)?;
        tx.commit().db_context("Failed to commit transaction")?;

        self.get_care_plan(id)?
            .ok_or(CarePlanError::PlanNotFound { id })
    }

    /// Retrieves a plan with its phases and tasks.
    pub fn get_care_plan(&self, id: u64) -> Result<Option<CarePlan>> {
        let query = format!("SELECT {PLAN_COLUMNS} FROM care_plans WHERE id = ?1");
        let plan = self
            .connection
            .query_row(&query, params![id as i64], Self::build_plan_from_row)
            .optional()
            .db_context("Failed to query care plan")?;

        match plan {
            Some(mut plan) => {
                plan.phases = self.load_phases(plan.id)?;
                Ok(Some(plan))
            }
            None => Ok(None),
        }
    }

    /// Lists plans, newest first, optionally for a single horse.
    pub fn list_care_plans(&self, horse_id: Option<u64>) -> Result<Vec<CarePlan>> {
        let mut query = format!("SELECT {PLAN_COLUMNS} FROM care_plans");
        let mut params_vec: Vec<i64> = Vec::new();
        if let Some(horse_id) = horse_id {
            query.push_str(" WHERE horse_id = ?1");
            params_vec.push(horse_id as i64);
        }
        query.push_str(" ORDER BY start_date DESC, id DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let mut plans: Vec<CarePlan> = stmt
            .query_map(rusqlite::params_from_iter(params_vec), Self::build_plan_from_row)
            .db_context("Failed to query care plans")?
            .collect::<std::result::Result<_, _>>()
            .db_context("Failed to fetch care plans")?;

        for plan in &mut plans {
            plan.phases = self.load_phases(plan.id)?;
        }

        Ok(plans)
    }

    /// Changes a plan's lifecycle status.
    pub fn set_status(&mut self, id: u64, status: PlanStatus) -> Result<()> {
        let updated = self
            .connection
            .execute(
                UPDATE_STATUS_SQL,
                params![status.as_str(), Timestamp::now().to_string(), id as i64],
            )
            .db_context("Failed to update care plan status")?;

        if updated == 0 {
            return Err(CarePlanError::PlanNotFound { id });
        }
        Ok(())
    }

    /// Permanently deletes a plan together with its phases and tasks.
    pub fn delete_care_plan(&mut self, id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_PLAN_SQL, params![id as i64])
            .db_context("Failed to delete care plan")?;

        if deleted == 0 {
            return Err(CarePlanError::PlanNotFound { id });
        }
        Ok(())
    }
}
