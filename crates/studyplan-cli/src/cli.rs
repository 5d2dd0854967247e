//! Command-line argument wrappers and command handlers
//!
//! Each subcommand has a clap `Args` struct that converts into the matching
//! core parameter type with `From`, keeping clap out of `studyplan-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner → Display → Renderer
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use jiff::civil::Date;
use studyplan_core::{
    coach,
    params::{
        GeneratePlan, ImportSyllabus, MarkTask, SetProfile, ShowDay, SummarizeProgress,
        UpdateTaskStatus, DEFAULT_PLAN_DAYS,
    },
    progress::DEFAULT_WINDOW_DAYS,
    models::DEFAULT_DAILY_MINUTES,
    today, DayPlan, OperationStatus, PlanOverview, Planner,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Profile
// ============================================================================

/// Save your learner profile
#[derive(Args)]
pub struct SetProfileArgs {
    /// Your name
    #[arg(long)]
    pub name: String,
    /// Grade or level you are in
    #[arg(long, default_value = "")]
    pub grade: String,
    /// Subjects you study, comma-separated
    #[arg(long, value_delimiter = ',')]
    pub subjects: Vec<String>,
    /// Maximum minutes you can study per day
    #[arg(long, default_value_t = DEFAULT_DAILY_MINUTES)]
    pub daily_minutes: u32,
    /// Whether you prefer studying in the morning or evening
    #[arg(long, default_value = "")]
    pub preference: String,
}

impl From<SetProfileArgs> for SetProfile {
    fn from(val: SetProfileArgs) -> Self {
        SetProfile {
            name: val.name,
            grade: val.grade,
            subjects: val.subjects,
            daily_study_minutes: val.daily_minutes,
            preference: val.preference,
        }
    }
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Create or replace your profile
    Set(SetProfileArgs),
    /// Show the stored profile
    Show,
}

// ============================================================================
// Syllabus
// ============================================================================

/// Import a syllabus JSON file
///
/// The file must look like
/// `{"subjects": [{"name": "Math", "topics": [{"title": "Fractions", "difficulty": 2}]}]}`.
/// Difficulty runs from 1 to 5 and defaults to 3.
#[derive(Args)]
pub struct ImportSyllabusArgs {
    /// Path of the syllabus file to import
    pub path: PathBuf,
}

impl From<ImportSyllabusArgs> for ImportSyllabus {
    fn from(val: ImportSyllabusArgs) -> Self {
        ImportSyllabus { path: val.path }
    }
}

#[derive(Subcommand)]
pub enum SyllabusCommands {
    /// Import a syllabus file, replacing the current one
    #[command(alias = "i")]
    Import(ImportSyllabusArgs),
    /// Show the current syllabus
    Show,
}

// ============================================================================
// Plan
// ============================================================================

/// Generate a new study plan, replacing the current one
#[derive(Args)]
pub struct GeneratePlanArgs {
    /// Number of days to plan
    #[arg(short, long, default_value_t = DEFAULT_PLAN_DAYS, allow_negative_numbers = true)]
    pub days: i64,
    /// First day of the plan (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub start: Option<Date>,
}

impl From<GeneratePlanArgs> for GeneratePlan {
    fn from(val: GeneratePlanArgs) -> Self {
        GeneratePlan {
            days: val.days,
            start_date: val.start,
        }
    }
}

/// Show the tasks planned for one day
#[derive(Args)]
pub struct ShowDayArgs {
    /// Day to show (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<Date>,
}

impl From<ShowDayArgs> for ShowDay {
    fn from(val: ShowDayArgs) -> Self {
        ShowDay { date: val.date }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Generate a plan from the profile and syllabus
    #[command(alias = "g")]
    Generate(GeneratePlanArgs),
    /// Show one day of the plan
    #[command(alias = "s")]
    Show(ShowDayArgs),
    /// Show the whole plan
    #[command(aliases = ["l", "ls"])]
    List,
}

// ============================================================================
// Task
// ============================================================================

/// Command-line representation of task status values
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum TaskStatusArg {
    /// Not yet studied
    Planned,
    /// Studied
    Done,
    /// Passed over
    Skipped,
}

impl std::fmt::Display for TaskStatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatusArg::Planned => write!(f, "planned"),
            TaskStatusArg::Done => write!(f, "done"),
            TaskStatusArg::Skipped => write!(f, "skipped"),
        }
    }
}

/// Set the status of the task for a topic on a date
#[derive(Args)]
pub struct UpdateTaskArgs {
    /// Date of the task (YYYY-MM-DD)
    pub date: Date,
    /// Topic title exactly as shown in the plan
    pub topic: String,
    /// New status
    pub status: TaskStatusArg,
}

impl From<UpdateTaskArgs> for UpdateTaskStatus {
    fn from(val: UpdateTaskArgs) -> Self {
        UpdateTaskStatus {
            date: val.date,
            topic: val.topic,
            status: val.status.to_string(),
        }
    }
}

/// Set the status of a task by its number in the day's list
#[derive(Args)]
pub struct MarkTaskArgs {
    /// Task number as shown by `plan show`
    pub index: usize,
    /// New status
    pub status: TaskStatusArg,
    /// Day of the task (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<Date>,
}

impl From<MarkTaskArgs> for MarkTask {
    fn from(val: MarkTaskArgs) -> Self {
        MarkTask {
            date: val.date,
            index: val.index,
            status: val.status.to_string(),
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Update a task addressed by date and topic
    #[command(alias = "u")]
    Update(UpdateTaskArgs),
    /// Update a task by its number in a day's list
    #[command(alias = "m")]
    Mark(MarkTaskArgs),
}

// ============================================================================
// Summary
// ============================================================================

/// Completion statistics for recent days
#[derive(Args)]
pub struct SummaryArgs {
    /// Number of days to look back
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_DAYS)]
    pub window: u32,
    /// Last day of the window (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<Date>,
}

impl From<SummaryArgs> for SummarizeProgress {
    fn from(val: SummaryArgs) -> Self {
        SummarizeProgress {
            window_days: val.window,
            reference_date: val.date,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs commands against a planner and renders the results.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_profile_command(&self, command: ProfileCommands) -> Result<()> {
        match command {
            ProfileCommands::Set(args) => {
                let profile = self
                    .planner
                    .save_profile(args.into())
                    .await
                    .context("Failed to save profile")?;
                self.renderer.render(&profile.to_string())?;
                self.renderer
                    .render(&OperationStatus::success("Profile saved.").to_string())
            }
            ProfileCommands::Show => match self.planner.load_profile().await? {
                Some(profile) => self.renderer.render(&profile.to_string()),
                None => self
                    .renderer
                    .render("No profile found. Run `studyplan profile set` first.\n"),
            },
        }
    }

    pub async fn handle_syllabus_command(&self, command: SyllabusCommands) -> Result<()> {
        match command {
            SyllabusCommands::Import(args) => {
                let params: ImportSyllabus = args.into();
                let syllabus = self
                    .planner
                    .import_syllabus(&params)
                    .await
                    .with_context(|| format!("Failed to import {}", params.path.display()))?;
                self.renderer.render(&syllabus.to_string())?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Imported {} topics.",
                        syllabus.topic_count()
                    ))
                    .to_string(),
                )
            }
            SyllabusCommands::Show => match self.planner.load_syllabus().await? {
                Some(syllabus) => self.renderer.render(&syllabus.to_string()),
                None => self
                    .renderer
                    .render("No syllabus found. Run `studyplan syllabus import <file>` first.\n"),
            },
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Generate(args) => {
                let params: GeneratePlan = args.into();
                let tasks = self
                    .planner
                    .generate_plan(&params)
                    .await
                    .context("Failed to generate plan")?;
                let overview = PlanOverview(tasks);
                self.renderer.render(&overview.to_string())?;
                if overview.is_empty() {
                    return Ok(());
                }
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Study plan generated for {} days.",
                        params.days
                    ))
                    .to_string(),
                )
            }
            PlanCommands::Show(args) => self.show_day(args.into()).await,
            PlanCommands::List => {
                let tasks = self.planner.all_tasks().await?;
                self.renderer.render(&PlanOverview(tasks).to_string())
            }
        }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        let status = match command {
            TaskCommands::Update(args) => {
                let params: UpdateTaskStatus = args.into();
                let updated = self
                    .planner
                    .update_task_status(&params)
                    .await
                    .context("Failed to update task")?;
                if updated {
                    OperationStatus::success(format!(
                        "Updated task '{}' on {} to status '{}'.",
                        params.topic, params.date, params.status
                    ))
                } else {
                    OperationStatus::unchanged(format!(
                        "No task for '{}' on {}. Nothing was changed.",
                        params.topic, params.date
                    ))
                }
            }
            TaskCommands::Mark(args) => {
                let params: MarkTask = args.into();
                let task = self
                    .planner
                    .mark_task(&params)
                    .await
                    .context("Failed to update task")?;
                OperationStatus::success(format!(
                    "Updated task '{}' to status '{}'.",
                    task.topic, params.status
                ))
            }
        };
        self.renderer.render(&status.to_string())
    }

    pub async fn handle_summary(&self, args: SummaryArgs) -> Result<()> {
        let summary = self
            .planner
            .summarize_progress(&args.into())
            .await
            .context("Failed to summarize progress")?;
        self.renderer.render(&summary.to_string())
    }

    /// Shows one day of the plan, with a coach message when it is today.
    pub async fn show_day(&self, params: ShowDay) -> Result<()> {
        let date = params.date.unwrap_or_else(today);
        let tasks = self.planner.show_day(&ShowDay { date: Some(date) }).await?;
        let has_tasks = !tasks.is_empty();
        self.renderer.render(&DayPlan { date, tasks }.to_string())?;

        if has_tasks && date == today() {
            self.renderer
                .render(&format!("\n**Coach**: {}\n", coach::motivation(date)))?;
        }
        Ok(())
    }
}
