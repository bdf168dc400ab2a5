//! Command handlers
//!
//! [`Cli`] plays the part of the page hosting the editor: it supplies the
//! editor props, keeps the draft between invocations, owns the
//! `is_submitting` flag while a submit is awaited, and renders the result.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use livery_care_core::{
    CarePlanEditor, CarePlanPayload, CarePlanSummaries, CarePlanner, CarePlannerBuilder,
    CreateResult, DeleteResult, DraftView, EditorProps, OperationStatus, PhasePatch, PlanStatus,
    ProgramPatch, TaskPatch, UpdateResult,
};
use log::info;

use crate::{
    args::{
        DraftCommands, EditDraftArgs, NewDraftArgs, PhaseCommands, PlanCommands, TaskCommands,
    },
    drafts::DraftStore,
    renderer::TerminalRenderer,
};

pub struct Cli {
    database_file: Option<PathBuf>,
    drafts: DraftStore,
    renderer: TerminalRenderer,
    is_admin: bool,
}

impl Cli {
    pub fn new(
        database_file: Option<PathBuf>,
        drafts: DraftStore,
        renderer: TerminalRenderer,
        is_admin: bool,
    ) -> Self {
        Self {
            database_file,
            drafts,
            renderer,
            is_admin,
        }
    }

    /// Opens the store only for commands that need it.
    async fn planner(&self) -> Result<CarePlanner> {
        CarePlannerBuilder::new()
            .with_database_path(self.database_file.as_ref())
            .build()
            .await
            .context("Failed to initialize planner")
    }

    pub async fn handle_draft_command(&self, command: DraftCommands) -> Result<()> {
        match command {
            DraftCommands::New(args) => self.new_draft(args),
            DraftCommands::Edit(args) => self.edit_draft(args).await,
            DraftCommands::Show => {
                let editor = self.load_draft()?;
                self.show_draft(&editor)
            }
            DraftCommands::Set(args) => self.modify_draft(|editor| {
                editor.update_program(ProgramPatch::from(args))?;
                Ok(())
            }),
            DraftCommands::Submit => self.submit_draft().await,
            DraftCommands::Cancel => self.cancel_draft(),
        }
    }

    pub fn handle_phase_command(&self, command: PhaseCommands) -> Result<()> {
        match command {
            PhaseCommands::Add => self.modify_draft(|editor| {
                editor.add_phase();
                Ok(())
            }),
            PhaseCommands::Remove(args) => self.modify_draft(|editor| {
                editor.remove_phase(position(args.phase, "phase")?)?;
                Ok(())
            }),
            PhaseCommands::Update(args) => self.modify_draft(|editor| {
                editor.update_phase(position(args.phase, "phase")?, PhasePatch::from(&args))?;
                Ok(())
            }),
        }
    }

    pub fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => self.modify_draft(|editor| {
                editor.add_task(position(args.phase, "phase")?)?;
                Ok(())
            }),
            TaskCommands::Remove(args) => self.modify_draft(|editor| {
                editor.remove_task(
                    position(args.phase, "phase")?,
                    position(args.task, "task")?,
                )?;
                Ok(())
            }),
            TaskCommands::Update(args) => self.modify_draft(|editor| {
                editor.update_task(
                    position(args.phase, "phase")?,
                    position(args.task, "task")?,
                    TaskPatch::from(&args),
                )?;
                Ok(())
            }),
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        let planner = self.planner().await?;
        match command {
            PlanCommands::List(args) => {
                let summaries = planner.list_care_plan_summaries(args.horse_id).await?;
                self.renderer
                    .render(&CarePlanSummaries(summaries).to_string())
            }
            PlanCommands::Show(args) => match planner.get_care_plan(args.id).await? {
                Some(plan) => self.renderer.render(&plan.to_string()),
                None => bail!("Care plan with ID {} not found", args.id),
            },
            PlanCommands::Complete(args) => {
                self.change_status(&planner, args.id, PlanStatus::Completed)
                    .await
            }
            PlanCommands::Cancel(args) => {
                self.change_status(&planner, args.id, PlanStatus::Cancelled)
                    .await
            }
            PlanCommands::Delete(args) => {
                if !args.confirm {
                    bail!(
                        "Deleting plan {} cannot be undone. Re-run with --confirm",
                        args.id
                    );
                }
                let plan = planner
                    .get_care_plan(args.id)
                    .await?
                    .ok_or_else(|| anyhow!("Care plan with ID {} not found", args.id))?;
                planner.delete_care_plan(args.id).await?;
                info!("Deleted care plan {}", args.id);
                self.renderer.render(&DeleteResult::new(plan).to_string())
            }
        }
    }

    /// Prints the JSON schema of the submit payload.
    pub fn print_schema(&self) -> Result<()> {
        let schema = schemars::schema_for!(CarePlanPayload);
        let json = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
        println!("{json}");
        Ok(())
    }

    fn new_draft(&self, args: NewDraftArgs) -> Result<()> {
        self.ensure_no_draft(args.force)?;

        let props = EditorProps::new(args.horse_id, args.horse_name).with_admin(self.is_admin);
        let mut editor = match args.start_date {
            Some(start_date) => CarePlanEditor::create_starting(props, start_date),
            None => CarePlanEditor::create(props),
        };
        if let Some(name) = args.name {
            editor.update_program(ProgramPatch {
                name: Some(name),
                ..Default::default()
            })?;
        }

        self.drafts.save(&editor)?;
        self.show_draft(&editor)
    }

    async fn edit_draft(&self, args: EditDraftArgs) -> Result<()> {
        self.ensure_no_draft(args.force)?;

        let planner = self.planner().await?;
        let plan = planner
            .get_care_plan(args.id)
            .await?
            .ok_or_else(|| anyhow!("Care plan with ID {} not found", args.id))?;

        let horse_name = args
            .horse_name
            .unwrap_or_else(|| format!("horse {}", plan.horse_id));
        let props = EditorProps::new(plan.horse_id, horse_name).with_admin(self.is_admin);
        let editor = CarePlanEditor::edit(props, &plan);

        self.drafts.save(&editor)?;
        self.show_draft(&editor)
    }

    async fn submit_draft(&self) -> Result<()> {
        let mut editor = self.load_draft()?;
        let planner = self.planner().await?;
        let submitter = planner.submitter(editor.source_id());

        editor.set_submitting(true);
        let outcome = editor.submit(&submitter).await;
        editor.set_submitting(false);

        if let Err(e) = outcome {
            // Keep the draft, with its error message, for another attempt
            self.drafts.save(&editor)?;
            return Err(e).context("Care plan was not saved");
        }

        self.drafts.discard()?;
        let id = submitter
            .saved_id()
            .context("Submit succeeded without a stored plan")?;
        let plan = planner
            .get_care_plan(id)
            .await?
            .ok_or_else(|| anyhow!("Care plan with ID {id} not found"))?;
        info!("Submitted care plan {id}");

        let output = match editor.source_id() {
            Some(_) => UpdateResult::new(plan).to_string(),
            None => CreateResult::new(plan).to_string(),
        };
        self.renderer.render(&output)
    }

    fn cancel_draft(&self) -> Result<()> {
        let editor = self.load_draft()?;
        editor.cancel();
        self.drafts.discard()?;
        self.renderer.render(
            &OperationStatus::success("Draft discarded".to_string()).to_string(),
        )
    }

    async fn change_status(&self, planner: &CarePlanner, id: u64, status: PlanStatus) -> Result<()> {
        let plan = planner
            .set_status(id, status)
            .await?
            .ok_or_else(|| anyhow!("Care plan with ID {id} not found"))?;
        info!("Care plan {id} is now {status}");
        let changes = vec![format!("Status set to {status}")];
        self.renderer
            .render(&UpdateResult::with_changes(plan, changes).to_string())
    }

    fn load_draft(&self) -> Result<CarePlanEditor> {
        let mut editor = self.drafts.load()?;
        editor.set_admin(self.is_admin);
        Ok(editor)
    }

    /// Loads the draft, applies `change`, saves and shows the result.
    ///
    /// A failed change leaves the draft file untouched.
    fn modify_draft<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut CarePlanEditor) -> Result<()>,
    {
        let mut editor = self.load_draft()?;
        change(&mut editor)?;
        self.drafts.save(&editor)?;
        self.show_draft(&editor)
    }

    fn show_draft(&self, editor: &CarePlanEditor) -> Result<()> {
        self.renderer.render(&DraftView(editor).to_string())
    }

    fn ensure_no_draft(&self, force: bool) -> Result<()> {
        if self.drafts.exists() && !force {
            bail!(
                "A draft is already open at {}. Submit or cancel it first, or pass --force",
                self.drafts.path().display()
            );
        }
        Ok(())
    }
}

/// Converts a 1-based position from the command line to an index.
fn position(value: usize, what: &str) -> Result<usize> {
    value
        .checked_sub(1)
        .ok_or_else(|| anyhow!("{what} numbers start at 1"))
}
