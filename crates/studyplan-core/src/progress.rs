//! Completion statistics over a window of recent days.

use std::collections::BTreeMap;

use jiff::{civil::Date, Span};

use crate::models::{ProgressSummary, StudyTask, SubjectProgress, TaskStatus};

/// Days looked back by the weekly summary.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Summarize tasks dated within `[reference_date - window_days, reference_date]`.
///
/// Bounds are inclusive and counted in whole days. Tasks after the reference
/// date are ignored. An empty window yields a completion rate of 0.
///
/// ```rust
/// use jiff::civil::date;
/// use studyplan_core::progress::evaluate;
///
/// let summary = evaluate(&[], 7, date(2024, 6, 8));
/// assert_eq!(summary.completion_rate, 0.0);
/// assert!(summary.subjects.is_empty());
/// ```
pub fn evaluate(tasks: &[StudyTask], window_days: u32, reference_date: Date) -> ProgressSummary {
    // Windows reaching past the calendar start cover everything before the reference.
    let window_start = Span::new()
        .try_days(i64::from(window_days))
        .and_then(|span| reference_date.checked_sub(span))
        .unwrap_or(Date::MIN);

    let mut total = 0;
    let mut done = 0;
    let mut skipped = 0;
    let mut subjects: BTreeMap<String, SubjectProgress> = BTreeMap::new();

    for task in tasks
        .iter()
        .filter(|t| t.date >= window_start && t.date <= reference_date)
    {
        total += 1;
        let entry = subjects.entry(task.subject.clone()).or_default();
        entry.seen += 1;

        match task.status {
            TaskStatus::Done => {
                done += 1;
                entry.done += 1;
            }
            TaskStatus::Skipped => skipped += 1,
            TaskStatus::Planned => {}
        }
    }

    let completion_rate = if total > 0 {
        f64::from(done) / f64::from(total) * 100.0
    } else {
        0.0
    };

    ProgressSummary {
        window_days,
        reference_date,
        total_tasks: total,
        done,
        skipped,
        completion_rate,
        subjects,
    }
}
