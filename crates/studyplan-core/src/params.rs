//! Parameter structures for studyplan operations
//!
//! These structures carry requests from an interface (the CLI today) into the
//! [`Planner`](crate::Planner) without any framework-specific derives. The
//! interface layer defines its own argument types and converts them with
//! `From` impls:
//!
//! ```text
//! CLI Args (clap) ──into()──▶ Core Params ──▶ Planner
//! ```
//!
//! Fields that the user may leave out are `Option`s and resolved by the
//! planner (for example, a missing date means "today").

use std::path::PathBuf;

use jiff::civil::Date;

use crate::{models::UserProfile, progress::DEFAULT_WINDOW_DAYS};

/// Planning horizon used when the caller does not choose one.
pub const DEFAULT_PLAN_DAYS: i64 = 14;

/// Parameters for generating a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratePlan {
    /// Number of days to plan; must be positive
    pub days: i64,
    /// First planned day, today if `None`
    pub start_date: Option<Date>,
}

impl Default for GeneratePlan {
    fn default() -> Self {
        Self {
            days: DEFAULT_PLAN_DAYS,
            start_date: None,
        }
    }
}

/// Parameters for storing the learner profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetProfile {
    pub name: String,
    pub grade: String,
    pub subjects: Vec<String>,
    pub daily_study_minutes: u32,
    pub preference: String,
}

impl From<SetProfile> for UserProfile {
    fn from(params: SetProfile) -> Self {
        UserProfile {
            name: params.name.trim().to_string(),
            grade: params.grade.trim().to_string(),
            subjects: params
                .subjects
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            daily_study_minutes: params.daily_study_minutes,
            preference: params.preference.trim().to_string(),
        }
    }
}

/// Parameters for importing a syllabus file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSyllabus {
    pub path: PathBuf,
}

/// Parameters for selecting a single day of the plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowDay {
    /// Day to show, today if `None`
    pub date: Option<Date>,
}

/// Parameters for updating a task addressed by (date, topic).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskStatus {
    pub date: Date,
    pub topic: String,
    /// One of `planned`, `done`, `skipped`
    pub status: String,
}

/// Parameters for updating a task by its position in a day's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkTask {
    /// Day the task is on, today if `None`
    pub date: Option<Date>,
    /// 1-based position within that day's tasks
    pub index: usize,
    /// One of `planned`, `done`, `skipped`
    pub status: String,
}

/// Parameters for the progress summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeProgress {
    /// Days looked back from the reference date
    pub window_days: u32,
    /// Last day of the window, today if `None`
    pub reference_date: Option<Date>,
}

impl Default for SummarizeProgress {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            reference_date: None,
        }
    }
}
