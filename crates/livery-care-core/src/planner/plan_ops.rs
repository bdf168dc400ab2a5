//! Care plan operations for the CarePlanner.

use super::CarePlanner;
use crate::{
    error::Result,
    models::{CarePlan, CarePlanSummary, PlanStatus},
    payload::CarePlanPayload,
};

impl CarePlanner {
    /// Stores a new care plan.
    pub async fn create_care_plan(&self, payload: CarePlanPayload) -> Result<CarePlan> {
        self.with_database(move |db| db.create_care_plan(&payload))
            .await
    }

    /// Replaces the stored plan `id` with `payload`.
    pub async fn replace_care_plan(&self, id: u64, payload: CarePlanPayload) -> Result<CarePlan> {
        self.with_database(move |db| db.replace_care_plan(id, &payload))
            .await
    }

    /// Retrieves a plan by its ID.
    pub async fn get_care_plan(&self, id: u64) -> Result<Option<CarePlan>> {
        self.with_database(move |db| db.get_care_plan(id)).await
    }

    /// Lists plans, optionally only those of one horse.
    pub async fn list_care_plans(&self, horse_id: Option<u64>) -> Result<Vec<CarePlan>> {
        self.with_database(move |db| db.list_care_plans(horse_id))
            .await
    }

    /// Lists plans as summaries for compact display.
    pub async fn list_care_plan_summaries(
        &self,
        horse_id: Option<u64>,
    ) -> Result<Vec<CarePlanSummary>> {
        let plans = self.list_care_plans(horse_id).await?;
        Ok(plans.iter().map(CarePlanSummary::from).collect())
    }

    /// Changes a plan's status and returns the updated plan.
    pub async fn set_status(&self, id: u64, status: PlanStatus) -> Result<Option<CarePlan>> {
        self.with_database(move |db| {
            db.set_status(id, status)?;
            db.get_care_plan(id)
        })
        .await
    }

    /// Permanently deletes a plan. This operation cannot be undone.
    pub async fn delete_care_plan(&self, id: u64) -> Result<()> {
        self.with_database(move |db| db.delete_care_plan(id))
            .await
    }
}
