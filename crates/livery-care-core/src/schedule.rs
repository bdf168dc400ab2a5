//! Phase scheduling: the start-day chain and derived dates.
//!
//! A program's phases run back to back. Phase 1 always starts on day 1 and
//! every later phase starts the day after its predecessor ends:
//!
//! ```text
//! start_day[i] = start_day[i - 1] + duration_days[i - 1]
//! ```
//!
//! Everything here is a plain function over a phase slice so the chain can be
//! exercised without an editor around it.

use jiff::{Span, civil::Date};

use crate::{editor::PhaseDraft, error::Result};

/// Start day for a phase appended after `phases`.
pub fn next_start_day(phases: &[PhaseDraft]) -> u32 {
    phases
        .last()
        .map(|last| last.start_day.saturating_add(last.duration_days))
        .unwrap_or(1)
}

/// Recomputes `start_day` for every phase after `index` from its predecessor.
///
/// Phases at or before `index` are left alone, including any manually
/// entered `start_day`.
pub fn chain_start_days_after(phases: &mut [PhaseDraft], index: usize) {
    for i in (index + 1)..phases.len() {
        let previous = &phases[i - 1];
        phases[i].start_day = previous.start_day.saturating_add(previous.duration_days);
    }
}

/// Pins phase 1 to day 1 and rebuilds the whole chain left to right.
pub fn rebuild_chain(phases: &mut [PhaseDraft]) {
    if let Some(first) = phases.first_mut() {
        first.start_day = 1;
    }
    chain_start_days_after(phases, 0);
}

/// Sets `phase_number` to its 1-based position.
pub fn renumber_phases(phases: &mut [PhaseDraft]) {
    for (position, phase) in phases.iter_mut().enumerate() {
        phase.phase_number = position as u32 + 1;
    }
}

/// Sets every task's `sequence` in `phase` to its 1-based position.
pub fn renumber_tasks(phase: &mut PhaseDraft) {
    for (position, task) in phase.tasks.iter_mut().enumerate() {
        task.sequence = position as u32 + 1;
    }
}

/// Length of the program in days, i.e. the last day of the last phase.
pub fn total_days(phases: &[PhaseDraft]) -> u32 {
    phases
        .last()
        .map(|last| last.start_day.saturating_add(last.duration_days).saturating_sub(1))
        .unwrap_or(0)
}

/// Date of the last program day when day 1 falls on `start_date`.
pub fn end_date(start_date: Date, total_days: u32) -> Result<Date> {
    let offset = i64::from(total_days.saturating_sub(1));
    let span = Span::new().try_days(offset)?;
    Ok(start_date.checked_add(span)?)
}

/// Whether the phases satisfy the chain and numbering invariants.
pub fn is_consistent(phases: &[PhaseDraft]) -> bool {
    let chained = phases.first().is_none_or(|first| first.start_day == 1)
        && phases
            .windows(2)
            .all(|pair| {
                pair[1].start_day == pair[0].start_day.saturating_add(pair[0].duration_days)
            });
    let numbered = phases.iter().enumerate().all(|(i, phase)| {
        phase.phase_number == i as u32 + 1
            && phase
                .tasks
                .iter()
                .enumerate()
                .all(|(j, task)| task.sequence == j as u32 + 1)
    });
    chained && numbered
}
