//! Data models for syllabi, profiles, study tasks and progress summaries.
//!
//! Every record that crosses the storage boundary is a typed struct with
//! serde derives, so malformed JSON is rejected when it is read rather than
//! when a field is first used. Display implementations live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use studyplan_core::models::{StudyTask, TaskStatus};
//!
//! let task = StudyTask {
//!     subject: "Math".to_string(),
//!     topic: "Fractions".to_string(),
//!     date: date(2024, 6, 1),
//!     planned_minutes: 30,
//!     status: TaskStatus::Planned,
//! };
//! println!("{}", task); // Shows ○ Planned status icon
//! ```

pub mod profile;
pub mod status;
pub mod summary;
pub mod syllabus;
pub mod task;

#[cfg(test)]
mod tests;

pub use profile::{PlanContext, UserProfile, DEFAULT_DAILY_MINUTES};
pub use status::TaskStatus;
pub use summary::{ProgressSummary, SubjectProgress};
pub use syllabus::{EstimatedTopic, SubjectEntry, Syllabus, Topic, TopicEntry, DEFAULT_DIFFICULTY};
pub use task::{StudyPlan, StudyTask};
