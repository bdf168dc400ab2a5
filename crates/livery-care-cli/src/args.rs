//! Command-line argument definitions using clap
//!
//! Argument structs stay in this module and convert into the core patch types
//! with `From`, so nothing clap-specific leaks into `livery-care-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Patches → Editor
//! ```
//!
//! Phase and task positions are 1-based on the command line; the handlers in
//! [`crate::cli`] translate them to the editor's 0-based indices.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::civil::Date;
use livery_care_core::{FeedTime, Frequency, PhasePatch, ProgramPatch, TaskPatch, TaskType};

/// Care plan editor for livery yards
///
/// Build a rehabilitation plan for a horse as a sequence of phases, each with
/// a length in days and a list of recurring tasks. The plan being edited is
/// kept in a draft file between commands and saved to the database with
/// `draft submit`.
#[derive(Parser)]
#[command(version, about, name = "lc")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/livery-care/livery-care.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to the draft file holding the plan being edited. Defaults to
    /// $XDG_DATA_HOME/livery-care/draft.json
    #[arg(long, global = true)]
    pub draft_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Act as a yard admin (enables weekly pricing of staff-managed plans)
    #[arg(long, global = true)]
    pub admin: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open, inspect, submit or discard the draft
    #[command(alias = "d")]
    Draft {
        #[command(subcommand)]
        command: DraftCommands,
    },
    /// Edit the phases of the draft
    #[command(alias = "ph")]
    Phase {
        #[command(subcommand)]
        command: PhaseCommands,
    },
    /// Edit the tasks of a draft phase
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Manage stored care plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Print the JSON schema of a submitted care plan
    Schema,
}

// ============================================================================
// Draft
// ============================================================================

/// Start a new care plan draft
#[derive(ClapArgs)]
pub struct NewDraftArgs {
    #[arg(long, help = "Identifier of the horse the plan is for")]
    pub horse_id: u64,
    #[arg(long, help = "Name of the horse, shown in the editor heading")]
    pub horse_name: String,
    #[arg(short, long, help = "Program name")]
    pub name: Option<String>,
    #[arg(long, help = "First day of the program (YYYY-MM-DD), defaults to today")]
    pub start_date: Option<Date>,
    #[arg(long, help = "Replace an existing draft")]
    pub force: bool,
}

/// Open a stored care plan for editing
#[derive(ClapArgs)]
pub struct EditDraftArgs {
    #[arg(help = "Unique identifier of the stored plan to edit")]
    pub id: u64,
    #[arg(long, help = "Name of the horse, shown in the editor heading")]
    pub horse_name: Option<String>,
    #[arg(long, help = "Replace an existing draft")]
    pub force: bool,
}

/// Change program-level fields of the draft
#[derive(ClapArgs)]
pub struct SetProgramArgs {
    #[arg(short, long, help = "Program name")]
    pub name: Option<String>,
    #[arg(short, long, help = "Free-text description of the program")]
    pub description: Option<String>,
    #[arg(long, help = "Why the plan was prescribed")]
    pub reason: Option<String>,
    #[arg(long, help = "Vet or therapist who prescribed the plan")]
    pub prescribed_by: Option<String>,
    #[arg(long, help = "Date of the prescription (YYYY-MM-DD)")]
    pub prescription_date: Option<Date>,
    #[arg(long, conflicts_with = "prescription_date")]
    pub clear_prescription_date: bool,
    #[arg(long, help = "First day of the program (YYYY-MM-DD)")]
    pub start_date: Option<Date>,
    #[arg(long, help = "Explicit end date overriding the computed one (YYYY-MM-DD)")]
    pub expected_end_date: Option<Date>,
    #[arg(long, conflicts_with = "expected_end_date")]
    pub clear_expected_end_date: bool,
    #[arg(long, help = "Additional notes")]
    pub notes: Option<String>,
    #[arg(long, help = "Whether yard staff carry out the tasks (true/false)")]
    pub staff_managed: Option<bool>,
    #[arg(long, help = "Weekly price of a staff-managed plan (admins only)")]
    pub weekly_price: Option<String>,
}

impl From<SetProgramArgs> for ProgramPatch {
    fn from(val: SetProgramArgs) -> Self {
        ProgramPatch {
            name: val.name,
            description: val.description,
            reason: val.reason,
            prescribed_by: val.prescribed_by,
            prescription_date: clearable(val.prescription_date, val.clear_prescription_date),
            start_date: val.start_date,
            expected_end_date: clearable(val.expected_end_date, val.clear_expected_end_date),
            notes: val.notes,
            staff_managed: val.staff_managed,
            weekly_price: val.weekly_price,
        }
    }
}

#[derive(Subcommand)]
pub enum DraftCommands {
    /// Start a new care plan draft
    #[command(alias = "n")]
    New(NewDraftArgs),
    /// Open a stored care plan for editing
    #[command(alias = "e")]
    Edit(EditDraftArgs),
    /// Show the current draft
    #[command(alias = "s")]
    Show,
    /// Change program-level fields of the draft
    Set(SetProgramArgs),
    /// Validate the draft and save it
    Submit,
    /// Discard the draft
    Cancel,
}

// ============================================================================
// Phases
// ============================================================================

/// Remove a phase from the draft
#[derive(ClapArgs)]
pub struct RemovePhaseArgs {
    #[arg(help = "Phase number (starting at 1)")]
    pub phase: usize,
}

/// Update a phase of the draft
#[derive(ClapArgs)]
pub struct UpdatePhaseArgs {
    #[arg(help = "Phase number (starting at 1)")]
    pub phase: usize,
    #[arg(short, long, help = "Phase name")]
    pub name: Option<String>,
    #[arg(short, long, help = "Phase description")]
    pub description: Option<String>,
    #[arg(long, help = "Length of the phase in days; later phases move to follow it")]
    pub days: Option<u32>,
    #[arg(long, help = "Manual start day (ignored for the first phase)")]
    pub start_day: Option<u32>,
}

impl From<&UpdatePhaseArgs> for PhasePatch {
    fn from(val: &UpdatePhaseArgs) -> Self {
        PhasePatch {
            name: val.name.clone(),
            description: val.description.clone(),
            duration_days: val.days,
            start_day: val.start_day,
        }
    }
}

#[derive(Subcommand)]
pub enum PhaseCommands {
    /// Append a phase after the last one
    #[command(alias = "a")]
    Add,
    /// Remove a phase and renumber the rest
    #[command(aliases = ["rm", "r"])]
    Remove(RemovePhaseArgs),
    /// Update a phase
    #[command(alias = "u")]
    Update(UpdatePhaseArgs),
}

// ============================================================================
// Tasks
// ============================================================================

/// Append a task to a phase
#[derive(ClapArgs)]
pub struct AddTaskArgs {
    #[arg(help = "Phase number (starting at 1)")]
    pub phase: usize,
}

/// Remove a task from a phase
#[derive(ClapArgs)]
pub struct RemoveTaskArgs {
    #[arg(help = "Phase number (starting at 1)")]
    pub phase: usize,
    #[arg(help = "Task number within the phase (starting at 1)")]
    pub task: usize,
}

/// Update a task
#[derive(ClapArgs)]
pub struct UpdateTaskArgs {
    #[arg(help = "Phase number (starting at 1)")]
    pub phase: usize,
    #[arg(help = "Task number within the phase (starting at 1)")]
    pub task: usize,
    #[arg(
        short = 'k',
        long = "type",
        help = "exercise, walking, lunging, ridden, therapy, medication, observation or other"
    )]
    pub task_type: Option<TaskType>,
    #[arg(short, long, help = "What to do")]
    pub description: Option<String>,
    #[arg(short, long, help = "daily, twice-daily, every-other-day, weekly or as-needed")]
    pub frequency: Option<Frequency>,
    #[arg(short, long, help = "Minutes the task takes")]
    pub minutes: Option<u32>,
    #[arg(long, conflicts_with = "minutes")]
    pub clear_minutes: bool,
    #[arg(long, help = "Instructions for whoever carries out the task")]
    pub instructions: Option<String>,
    #[arg(long, help = "Equipment needed")]
    pub equipment: Option<String>,
    #[arg(long, help = "Whether the task is given with feed (true/false)")]
    pub feed_based: Option<bool>,
    #[arg(long, help = "morning, evening or both")]
    pub feed_time: Option<FeedTime>,
}

impl From<&UpdateTaskArgs> for TaskPatch {
    fn from(val: &UpdateTaskArgs) -> Self {
        TaskPatch {
            task_type: val.task_type,
            description: val.description.clone(),
            duration_minutes: if val.clear_minutes {
                Some(None)
            } else {
                val.minutes.map(Some)
            },
            frequency: val.frequency,
            instructions: val.instructions.clone(),
            equipment_needed: val.equipment.clone(),
            is_feed_based: val.feed_based,
            feed_time: val.feed_time,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Append a default task to a phase
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Remove a task and renumber the rest of its phase
    #[command(aliases = ["rm", "r"])]
    Remove(RemoveTaskArgs),
    /// Update a task
    #[command(alias = "u")]
    Update(UpdateTaskArgs),
}

// ============================================================================
// Stored plans
// ============================================================================

/// List stored care plans
#[derive(ClapArgs)]
pub struct ListPlansArgs {
    #[arg(long, help = "Only list plans for this horse")]
    pub horse_id: Option<u64>,
}

#[derive(ClapArgs)]
pub struct PlanIdArgs {
    #[arg(help = "Unique identifier of the stored plan")]
    pub id: u64,
}

/// Delete a plan permanently
#[derive(ClapArgs)]
pub struct DeletePlanArgs {
    #[arg(help = "Unique identifier of the plan to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// List stored care plans
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Show a stored care plan
    #[command(alias = "s")]
    Show(PlanIdArgs),
    /// Mark a plan as completed
    Complete(PlanIdArgs),
    /// Mark a plan as cancelled
    Cancel(PlanIdArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

fn clearable<T>(value: Option<T>, clear: bool) -> Option<Option<T>> {
    if clear { Some(None) } else { value.map(Some) }
}
