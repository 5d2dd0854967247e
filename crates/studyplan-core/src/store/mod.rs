//! Flat JSON persistence for the plan, the profile and the syllabus.
//!
//! A [`Store`] is a handle on a data directory. Each record lives in its own
//! file and is replaced wholesale on save:
//!
//! ```text
//! <data dir>/
//! ├── study_plan.json    {"tasks": [...]}
//! ├── syllabus.json      {"subjects": [...]}
//! └── user_profile.json  {"name": ..., "daily_study_minutes": ...}
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{PlannerError, Result};

pub mod plan_store;
pub mod profile_store;
mod utils;

pub(crate) use utils::read_json;

/// File holding the generated plan.
pub const PLAN_FILE: &str = "study_plan.json";
/// File holding the learner profile.
pub const PROFILE_FILE: &str = "user_profile.json";
/// File holding the imported syllabus.
pub const SYLLABUS_FILE: &str = "syllabus.json";

/// Handle on the data directory.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Opens the store rooted at `root`, creating the directory if needed.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| PlannerError::file_system(&root, e))?;
        Ok(Self { root })
    }

    /// Directory the store reads and writes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}
