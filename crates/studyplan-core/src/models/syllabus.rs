//! Syllabus input records and the flattened topic types derived from them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Difficulty assumed for topics that do not declare one.
pub const DEFAULT_DIFFICULTY: u8 = 3;

fn default_difficulty() -> u8 {
    DEFAULT_DIFFICULTY
}

/// A syllabus: subjects in declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Syllabus {
    #[serde(default)]
    pub subjects: Vec<SubjectEntry>,
}

/// One subject with its ordered topics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubjectEntry {
    pub name: String,
    #[serde(default)]
    pub topics: Vec<TopicEntry>,
}

/// A topic as written in the syllabus file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopicEntry {
    pub title: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: u8,
}

/// A topic flattened out of the syllabus, tagged with its subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub subject: String,
    pub title: String,
    pub difficulty: u8,
}

/// A topic paired with the minutes it is expected to take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatedTopic {
    pub topic: Topic,
    pub duration_minutes: u32,
}

impl Syllabus {
    /// Flatten all subjects into one topic list, preserving declaration order.
    pub fn topics(&self) -> Vec<Topic> {
        self.subjects
            .iter()
            .flat_map(|subject| {
                subject.topics.iter().map(move |entry| Topic {
                    subject: subject.name.clone(),
                    title: entry.title.clone(),
                    difficulty: entry.difficulty,
                })
            })
            .collect()
    }

    /// Number of topics across all subjects.
    pub fn topic_count(&self) -> usize {
        self.subjects.iter().map(|s| s.topics.len()).sum()
    }

    /// Check the syllabus before it is stored.
    ///
    /// Subject names and topic titles must be non-blank. Topic titles must be
    /// unique across the syllabus because tasks are addressed by (date, topic).
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for subject in &self.subjects {
            if subject.name.trim().is_empty() {
                return Err(PlannerError::validation("subjects.name")
                    .with_reason("Subject name cannot be empty"));
            }
            for entry in &subject.topics {
                if entry.title.trim().is_empty() {
                    return Err(PlannerError::validation("topics.title").with_reason(format!(
                        "Topic title cannot be empty (subject '{}')",
                        subject.name
                    )));
                }
                if !seen.insert(entry.title.as_str()) {
                    return Err(PlannerError::validation("topics.title").with_reason(format!(
                        "Topic '{}' appears more than once",
                        entry.title
                    )));
                }
            }
        }
        Ok(())
    }
}
