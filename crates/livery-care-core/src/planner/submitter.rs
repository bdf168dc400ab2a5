//! Store-backed submit hook for the editor.

use std::sync::Mutex;

use async_trait::async_trait;
use log::info;

use super::CarePlanner;
use crate::{editor::SubmitCarePlan, error::Result, payload::CarePlanPayload};

/// Persists editor submissions through a [`CarePlanner`].
///
/// Creates a new plan when `target` is `None`, otherwise replaces the plan
/// with that ID.
#[derive(Debug)]
pub struct PlanSubmitter {
    planner: CarePlanner,
    target: Option<u64>,
    saved_id: Mutex<Option<u64>>,
}

impl CarePlanner {
    /// Submit hook that writes to this planner's store.
    pub fn submitter(&self, target: Option<u64>) -> PlanSubmitter {
        PlanSubmitter {
            planner: self.clone(),
            target,
            saved_id: Mutex::new(None),
        }
    }
}

impl PlanSubmitter {
    /// ID of the plan written by the last successful submit.
    pub fn saved_id(&self) -> Option<u64> {
        self.saved_id.lock().ok().and_then(|id| *id)
    }
}

#[async_trait]
impl SubmitCarePlan for PlanSubmitter {
    async fn submit(&self, payload: CarePlanPayload) -> Result<()> {
        let plan = match self.target {
            Some(id) => self.planner.replace_care_plan(id, payload).await?,
            None => self.planner.create_care_plan(payload).await?,
        };
        info!("Stored care plan {} for horse {}", plan.id, plan.horse_id);

        if let Ok(mut saved_id) = self.saved_id.lock() {
            *saved_id = Some(plan.id);
        }
        Ok(())
    }
}
