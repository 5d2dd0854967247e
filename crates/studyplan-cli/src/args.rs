use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{PlanCommands, ProfileCommands, SummaryArgs, SyllabusCommands, TaskCommands};

/// Personal study planner
///
/// Turns a syllabus and your daily study time into a day-by-day plan, then
/// tracks which tasks you completed or skipped and how the week went.
#[derive(Parser)]
#[command(version, about, name = "studyplan")]
pub struct Args {
    /// Directory holding the plan, profile and syllabus files. Defaults to
    /// $XDG_DATA_HOME/studyplan
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command, today's plan is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Set up or show your profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Import or show the syllabus
    Syllabus {
        #[command(subcommand)]
        command: SyllabusCommands,
    },
    /// Generate and view the study plan
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Mark tasks as done or skipped
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Show the progress summary for recent days
    #[command(alias = "s")]
    Summary(SummaryArgs),
}
