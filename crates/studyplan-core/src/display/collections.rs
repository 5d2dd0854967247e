//! Collection wrapper types for displaying groups of study tasks.

use std::fmt;

use jiff::civil::Date;

use crate::models::StudyTask;

/// Tasks for one day, shown as a numbered list.
///
/// The numbers are the 1-based positions accepted by
/// [`Planner::mark_task`](crate::Planner::mark_task).
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use studyplan_core::{
///     display::DayPlan,
///     models::{StudyTask, TaskStatus},
/// };
///
/// let day = DayPlan {
///     date: date(2024, 6, 1),
///     tasks: vec![StudyTask {
///         subject: "Math".to_string(),
///         topic: "Limits".to_string(),
///         date: date(2024, 6, 1),
///         planned_minutes: 30,
///         status: TaskStatus::Planned,
///     }],
/// };
/// let output = format!("{}", day);
/// assert!(output.contains("1. [○ Planned] Math - Limits (30 min)"));
/// ```
pub struct DayPlan {
    pub date: Date,
    pub tasks: Vec<StudyTask>,
}

impl DayPlan {
    /// Total minutes planned for the day.
    pub fn total_minutes(&self) -> u32 {
        self.tasks.iter().map(|t| t.planned_minutes).sum()
    }
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tasks.is_empty() {
            return writeln!(
                f,
                "No tasks planned for {}. You may need to generate a plan.",
                self.date
            );
        }

        writeln!(f, "# Plan for {} ({} min)", self.date, self.total_minutes())?;
        writeln!(f)?;
        for (i, task) in self.tasks.iter().enumerate() {
            write!(f, "{}. ", i + 1)?;
            task.fmt_line(f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A whole plan grouped under one heading per day.
pub struct PlanOverview(pub Vec<StudyTask>);

impl PlanOverview {
    /// Check if the plan is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct days that have at least one task.
    pub fn day_count(&self) -> usize {
        let mut days: Vec<Date> = self.0.iter().map(|t| t.date).collect();
        days.dedup();
        days.len()
    }
}

impl fmt::Display for PlanOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(
                f,
                "No tasks were planned. Make sure a profile and a syllabus with topics exist."
            );
        }

        let minutes: u32 = self.0.iter().map(|t| t.planned_minutes).sum();
        writeln!(
            f,
            "# Study Plan ({} tasks over {} days, {} min)",
            self.0.len(),
            self.day_count(),
            minutes
        )?;

        let mut current: Option<Date> = None;
        for task in &self.0 {
            if current != Some(task.date) {
                writeln!(f)?;
                writeln!(f, "## {}", task.date)?;
                writeln!(f)?;
                current = Some(task.date);
            }
            write!(f, "- ")?;
            task.fmt_line(f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
