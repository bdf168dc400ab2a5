//! Livery Care CLI Application
//!
//! Command-line front end for building and storing horse care plans.

mod args;
mod cli;
mod drafts;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use drafts::DraftStore;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        draft_file,
        no_color,
        admin,
        command,
    } = Args::parse();

    let drafts = DraftStore::new(draft_file)?;
    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(database_file, drafts, renderer, admin);

    info!("Livery care started");

    match command {
        Commands::Draft { command } => cli.handle_draft_command(command).await,
        Commands::Phase { command } => cli.handle_phase_command(command),
        Commands::Task { command } => cli.handle_task_command(command),
        Commands::Plan { command } => cli.handle_plan_command(command).await,
        Commands::Schema => cli.print_schema(),
    }
}
