//! Progress summary types.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Completion tallies for a single subject.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubjectProgress {
    /// Tasks for the subject inside the window
    pub seen: u32,
    /// Of those, tasks marked done
    pub done: u32,
}

/// Aggregate completion statistics over a window of recent days.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressSummary {
    /// Days looked back from the reference date
    pub window_days: u32,
    /// Last day of the window (inclusive)
    pub reference_date: Date,
    /// Tasks inside the window
    pub total_tasks: u32,
    /// Tasks marked done
    pub done: u32,
    /// Tasks marked skipped
    pub skipped: u32,
    /// done / total as a percentage, 0 for an empty window
    pub completion_rate: f64,
    /// Per-subject breakdown keyed by subject name
    pub subjects: BTreeMap<String, SubjectProgress>,
}

impl ProgressSummary {
    /// Tasks still planned inside the window.
    pub fn planned(&self) -> u32 {
        self.total_tasks - self.done - self.skipped
    }

    /// True when the window contained no tasks at all.
    pub fn is_empty(&self) -> bool {
        self.total_tasks == 0
    }
}
