//! studyplan CLI Application
//!
//! Command-line interface for the studyplan study planning tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use studyplan_core::{params::ShowDay, PlannerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_dir,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_data_dir(data_dir)
        .build()
        .await
        .context("Failed to initialize planner")?;

    info!(target: "cli", "studyplan started: data_dir={}", planner.data_dir().display());

    let cli = Cli::new(planner, TerminalRenderer::new(!no_color));

    match command {
        Some(Profile { command }) => cli.handle_profile_command(command).await,
        Some(Syllabus { command }) => cli.handle_syllabus_command(command).await,
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Task { command }) => cli.handle_task_command(command).await,
        Some(Summary(args)) => cli.handle_summary(args).await,
        None => cli.show_day(ShowDay::default()).await,
    }
}
