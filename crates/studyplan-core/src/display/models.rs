//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer can style it, and it reads
//! fine as plain text when colors are disabled.

use std::fmt;

use crate::models::{ProgressSummary, StudyTask, Syllabus, TaskStatus, UserProfile};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl StudyTask {
    /// One-line summary without list marker: `[○ Planned] Math - Limits (30 min)`.
    pub(crate) fn fmt_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} - {} ({} min)",
            self.status.with_icon(),
            self.subject,
            self.topic,
            self.planned_minutes
        )
    }
}

impl fmt::Display for StudyTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- ")?;
        self.fmt_line(f)?;
        writeln!(f, " on {}", self.date)
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Profile: {}", self.name)?;
        writeln!(f)?;
        if !self.grade.is_empty() {
            writeln!(f, "- **Grade**: {}", self.grade)?;
        }
        if !self.subjects.is_empty() {
            writeln!(f, "- **Subjects**: {}", self.subjects.join(", "))?;
        }
        writeln!(f, "- **Daily study time**: {} min", self.daily_study_minutes)?;
        if !self.preference.is_empty() {
            writeln!(f, "- **Preference**: {}", self.preference)?;
        }
        Ok(())
    }
}

impl fmt::Display for Syllabus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Syllabus")?;
        if self.subjects.is_empty() {
            writeln!(f)?;
            return writeln!(f, "No subjects in this syllabus.");
        }

        for subject in &self.subjects {
            writeln!(f)?;
            writeln!(f, "## {}", subject.name)?;
            writeln!(f)?;
            if subject.topics.is_empty() {
                writeln!(f, "No topics.")?;
            }
            for topic in &subject.topics {
                writeln!(f, "- {} (difficulty {})", topic.title, topic.difficulty)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(
                f,
                "No recent tasks to evaluate in the {} days up to {}.",
                self.window_days, self.reference_date
            );
        }

        writeln!(f, "# Progress Summary")?;
        writeln!(f)?;
        writeln!(
            f,
            "Last {} days up to {}",
            self.window_days, self.reference_date
        )?;
        writeln!(f)?;
        writeln!(f, "- **Total tasks**: {}", self.total_tasks)?;
        writeln!(f, "- **Completed**: {}", self.done)?;
        writeln!(f, "- **Skipped**: {}", self.skipped)?;
        writeln!(f, "- **Completion rate**: {:.1}%", self.completion_rate)?;
        writeln!(f)?;
        writeln!(f, "## Tasks per subject")?;
        writeln!(f)?;
        for (subject, progress) in &self.subjects {
            writeln!(
                f,
                "- {}: {}/{} completed",
                subject, progress.done, progress.seen
            )?;
        }
        Ok(())
    }
}
