//! User profile and the read-only planning context derived from it.

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Daily study minutes assumed when a profile omits them.
pub const DEFAULT_DAILY_MINUTES: u32 = 60;

fn default_daily_minutes() -> u32 {
    DEFAULT_DAILY_MINUTES
}

/// Learner profile captured during intake.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    /// Upper bound on study minutes per day
    #[serde(default = "default_daily_minutes")]
    pub daily_study_minutes: u32,
    /// Free-form time-of-day preference, e.g. "morning"
    #[serde(default)]
    pub preference: String,
}

impl UserProfile {
    /// Check the profile before it is stored.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PlannerError::validation("name").with_reason("Name cannot be empty"));
        }
        if self.daily_study_minutes == 0 {
            return Err(PlannerError::validation("daily_study_minutes")
                .with_reason("Daily study minutes must be greater than zero"));
        }
        Ok(())
    }
}

/// Read-only configuration handed to plan generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanContext {
    /// Maximum minutes that may be scheduled on any single day
    pub daily_cap: u32,
    /// Subjects the learner declared; informational only
    pub subjects: Vec<String>,
}

impl From<&UserProfile> for PlanContext {
    fn from(profile: &UserProfile) -> Self {
        Self {
            daily_cap: profile.daily_study_minutes,
            subjects: profile.subjects.clone(),
        }
    }
}
