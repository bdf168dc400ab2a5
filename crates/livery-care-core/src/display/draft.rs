//! Markdown view of an open editor.

use std::fmt;

use crate::editor::{CarePlanEditor, PhaseDraft, TaskDraft};

/// Renders the editor's current tree, derived end date and last error.
///
/// Phase and task numbers shown are the 1-based positions used to address
/// them.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use livery_care_core::{
///     display::DraftView,
///     editor::{CarePlanEditor, EditorProps},
/// };
///
/// let editor = CarePlanEditor::create_starting(EditorProps::new(7, "Bramble"), date(2024, 1, 1));
/// let output = DraftView(&editor).to_string();
/// assert!(output.contains("- End: 2024-01-14"));
/// assert!(output.contains("### Phase 1: Phase 1 (days 1-14)"));
/// ```
pub struct DraftView<'a>(pub &'a CarePlanEditor);

impl fmt::Display for DraftView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let editor = self.0;
        let program = editor.program();
        let horse = &editor.props().horse_name;

        match editor.source_id() {
            Some(id) => writeln!(f, "# Editing care plan {id} for {horse}")?,
            None => writeln!(f, "# New care plan for {horse}")?,
        }
        writeln!(f)?;

        if let Some(error) = editor.error() {
            writeln!(f, "**Error**: {error}")?;
            writeln!(f)?;
        }

        let name = if program.name.trim().is_empty() {
            "(unnamed)"
        } else {
            program.name.as_str()
        };
        writeln!(f, "- Name: {name}")?;
        writeln!(f, "- Start: {}", program.start_date)?;
        match editor.display_end_date() {
            Ok(end) if program.expected_end_date.is_some() => writeln!(f, "- End: {end} (set)")?,
            Ok(end) => writeln!(f, "- End: {end}")?,
            Err(_) => writeln!(f, "- End: out of range")?,
        }
        for (label, value) in [
            ("Reason", &program.reason),
            ("Prescribed by", &program.prescribed_by),
        ] {
            if !value.trim().is_empty() {
                writeln!(f, "- {label}: {value}")?;
            }
        }
        if let Some(date) = program.prescription_date {
            writeln!(f, "- Prescription date: {date}")?;
        }
        if program.staff_managed {
            writeln!(f, "- Staff managed")?;
        }
        if editor.price_field_visible() {
            let price = if program.weekly_price.trim().is_empty() {
                "not set"
            } else {
                program.weekly_price.as_str()
            };
            writeln!(f, "- Weekly price: {price}")?;
        }

        if !program.description.trim().is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", program.description)?;
        }
        if !program.notes.trim().is_empty() {
            writeln!(f)?;
            writeln!(f, "> {}", program.notes)?;
        }

        writeln!(f, "\n## Phases")?;
        writeln!(f)?;
        for phase in &program.phases {
            fmt_phase(f, phase)?;
        }

        Ok(())
    }
}

fn fmt_phase(f: &mut fmt::Formatter<'_>, phase: &PhaseDraft) -> fmt::Result {
    writeln!(
        f,
        "### Phase {}: {} (days {}-{})",
        phase.phase_number,
        phase.name,
        phase.start_day,
        phase.end_day()
    )?;
    writeln!(f)?;

    if !phase.description.trim().is_empty() {
        writeln!(f, "{}", phase.description)?;
        writeln!(f)?;
    }

    for task in &phase.tasks {
        fmt_task(f, task)?;
    }
    writeln!(f)
}

fn fmt_task(f: &mut fmt::Formatter<'_>, task: &TaskDraft) -> fmt::Result {
    write!(
        f,
        "{}. **{}** ({}",
        task.sequence, task.task_type, task.frequency
    )?;
    if let Some(minutes) = task.duration_minutes {
        write!(f, ", {minutes} min")?;
    }
    if let Some(feed_time) = task.feeding().feed_time() {
        write!(f, ", with {feed_time} feed")?;
    }

    if task.description.trim().is_empty() {
        writeln!(f, "): _no description_")?;
    } else {
        writeln!(f, "): {}", task.description)?;
    }

    if !task.instructions.trim().is_empty() {
        writeln!(f, "   - Instructions: {}", task.instructions)?;
    }
    if !task.equipment_needed.trim().is_empty() {
        writeln!(f, "   - Equipment: {}", task.equipment_needed)?;
    }
    Ok(())
}
