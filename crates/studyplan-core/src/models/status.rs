//! Status enumeration for study tasks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Type-safe enumeration of task statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Task is scheduled and not yet acted on
    #[default]
    Planned,

    /// Task has been studied
    Done,

    /// Task was deliberately passed over
    Skipped,
}

impl FromStr for TaskStatus {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "planned" => Ok(TaskStatus::Planned),
            "done" => Ok(TaskStatus::Done),
            "skipped" => Ok(TaskStatus::Skipped),
            _ => Err(PlannerError::validation("status")
                .with_reason(format!("Invalid task status: {s} (expected planned, done or skipped)"))),
        }
    }
}

impl TaskStatus {
    /// Convert to the string stored in the plan file
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Planned => "planned",
            TaskStatus::Done => "done",
            TaskStatus::Skipped => "skipped",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Icons Used
    /// - `✓ Done` - Checkmark for studied topics
    /// - `✗ Skipped` - Cross for skipped topics
    /// - `○ Planned` - Circle for pending topics
    ///
    /// # Examples
    ///
    /// ```rust
    /// use studyplan_core::models::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Done.with_icon(), "✓ Done");
    /// assert_eq!(TaskStatus::Skipped.with_icon(), "✗ Skipped");
    /// assert_eq!(TaskStatus::Planned.with_icon(), "○ Planned");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskStatus::Done => "✓ Done",
            TaskStatus::Skipped => "✗ Skipped",
            TaskStatus::Planned => "○ Planned",
        }
    }
}
