//! Display implementations for stored models.
//!
//! Plans render as markdown: a heading, a metadata list, then one section per
//! phase with its tasks as a numbered list.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    CarePhase, CarePlan, CarePlanSummary, CareTask, FeedTime, Frequency, PlanStatus, TaskType,
};

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for FeedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for CarePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- Horse: {}", self.horse_id)?;
        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f, "- Start: {}", self.start_date)?;
        if let Some(end) = self.expected_end_date {
            writeln!(f, "- Expected end: {end}")?;
        }
        if let Some(reason) = &self.reason {
            writeln!(f, "- Reason: {reason}")?;
        }
        if let Some(prescribed_by) = &self.prescribed_by {
            match self.prescription_date {
                Some(date) => writeln!(f, "- Prescribed by: {prescribed_by} on {date}")?,
                None => writeln!(f, "- Prescribed by: {prescribed_by}")?,
            }
        }
        if self.staff_managed {
            match self.weekly_price {
                Some(price) => writeln!(f, "- Staff managed: {price:.2} per week")?,
                None => writeln!(f, "- Staff managed")?,
            }
        }
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "> {notes}")?;
        }

        if self.phases.is_empty() {
            writeln!(f, "\nNo phases in this plan.")?;
        } else {
            writeln!(f, "\n## Phases")?;
            writeln!(f)?;
            for phase in &self.phases {
                write!(f, "{phase}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for CarePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end_day = self.start_day.saturating_add(self.duration_days).saturating_sub(1);
        writeln!(
            f,
            "### Phase {}: {} (days {}-{end_day})",
            self.phase_number, self.name, self.start_day
        )?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "{desc}")?;
            writeln!(f)?;
        }

        for task in &self.tasks {
            write!(f, "{task}")?;
        }
        if !self.tasks.is_empty() {
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for CareTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. **{}** ({}",
            self.sequence, self.task_type, self.frequency
        )?;
        if let Some(minutes) = self.duration_minutes {
            write!(f, ", {minutes} min")?;
        }
        if self.is_feed_based
            && let Some(feed_time) = self.feed_time
        {
            write!(f, ", with {feed_time} feed")?;
        }
        writeln!(f, "): {}", self.description)?;

        if let Some(instructions) = &self.instructions {
            writeln!(f, "   - Instructions: {instructions}")?;
        }
        if let Some(equipment) = &self.equipment_needed {
            writeln!(f, "   - Equipment: {equipment}")?;
        }

        Ok(())
    }
}

impl fmt::Display for CarePlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {}, {})", self.name, self.id, self.status)?;
        writeln!(f)?;

        writeln!(f, "- **Horse**: {}", self.horse_id)?;
        match self.end_date {
            Some(end) => writeln!(f, "- **Dates**: {} to {end}", self.start_date)?,
            None => writeln!(f, "- **Dates**: from {}", self.start_date)?,
        }
        writeln!(
            f,
            "- **Phases**: {} ({} tasks)",
            self.total_phases, self.total_tasks
        )?;
        if self.staff_managed {
            writeln!(f, "- **Staff managed**")?;
        }
        writeln!(f)?;

        Ok(())
    }
}
