//! Core library for the studyplan study planning application.
//!
//! This crate turns a syllabus and a daily time budget into a dated study
//! plan, stores it as JSON, and reports progress on it.
//!
//! - [`schedule`]: duration estimates, minute distribution and the greedy
//!   day-by-day allocator
//! - [`store`]: flat JSON files for the plan, profile and syllabus
//! - [`progress`]: completion statistics over a window of days
//! - [`planner`]: the async [`Planner`] facade used by interfaces
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use studyplan_core::{
//!     params::{GeneratePlan, ImportSyllabus, SetProfile},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_data_dir(Some("data"))
//!     .build()
//!     .await?;
//!
//! planner
//!     .save_profile(SetProfile {
//!         name: "Ada".to_string(),
//!         grade: "11".to_string(),
//!         subjects: vec!["Math".to_string()],
//!         daily_study_minutes: 60,
//!         preference: "evening".to_string(),
//!     })
//!     .await?;
//! planner
//!     .import_syllabus(&ImportSyllabus {
//!         path: "syllabus.json".into(),
//!     })
//!     .await?;
//!
//! let tasks = planner.generate_plan(&GeneratePlan::default()).await?;
//! for task in &tasks {
//!     print!("{}", task);
//! }
//! # Ok(())
//! # }
//! ```

pub mod coach;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod progress;
pub mod schedule;
pub mod store;

// Re-export commonly used types
pub use display::{DayPlan, OperationStatus, PlanOverview};
pub use error::{PlannerError, Result};
pub use models::{
    EstimatedTopic, PlanContext, ProgressSummary, StudyPlan, StudyTask, SubjectProgress,
    Syllabus, TaskStatus, Topic, UserProfile,
};
pub use params::{
    GeneratePlan, ImportSyllabus, MarkTask, SetProfile, ShowDay, SummarizeProgress,
    UpdateTaskStatus,
};
pub use planner::{today, Planner, PlannerBuilder};
pub use store::Store;
