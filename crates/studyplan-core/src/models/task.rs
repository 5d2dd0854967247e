//! Study task and plan model definitions.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::TaskStatus;

/// A bounded block of study time for one topic on one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudyTask {
    /// Subject the topic belongs to
    pub subject: String,

    /// Title of the topic being studied
    pub topic: String,

    /// Calendar date the task is scheduled on
    pub date: Date,

    /// Minutes allotted to this task
    pub planned_minutes: u32,

    /// Current status of the task
    #[serde(default)]
    pub status: TaskStatus,
}

impl StudyTask {
    /// Returns true when this task is keyed by the given date and topic.
    pub fn matches(&self, date: Date, topic: &str) -> bool {
        self.date == date && self.topic == topic
    }
}

/// The persisted plan: an ordered list of tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudyPlan {
    /// Tasks in allocation order
    #[serde(default)]
    pub tasks: Vec<StudyTask>,
}

impl StudyPlan {
    /// Wrap an allocated task list.
    pub fn new(tasks: Vec<StudyTask>) -> Self {
        Self { tasks }
    }

    /// All tasks scheduled on `date`, in insertion order.
    pub fn tasks_for_date(&self, date: Date) -> Vec<StudyTask> {
        self.tasks
            .iter()
            .filter(|task| task.date == date)
            .cloned()
            .collect()
    }

    /// Set the status of the first task keyed by (date, topic).
    ///
    /// Returns `false` without touching the plan when nothing matches.
    pub fn set_status(&mut self, date: Date, topic: &str, status: TaskStatus) -> bool {
        match self.tasks.iter_mut().find(|task| task.matches(date, topic)) {
            Some(task) => {
                task.status = status;
                true
            }
            None => false,
        }
    }

    /// Sum of planned minutes across the whole plan.
    pub fn total_minutes(&self) -> u64 {
        self.tasks
            .iter()
            .map(|task| u64::from(task.planned_minutes))
            .sum()
    }
}
