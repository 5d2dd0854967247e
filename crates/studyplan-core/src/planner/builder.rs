//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    store::Store,
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    data_dir: Option<PathBuf>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { data_dir: None }
    }

    /// Sets a custom data directory.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/studyplan` or `~/.local/share/studyplan`
    pub fn with_data_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::XdgDirectory` if no default directory can be
    /// determined, or `PlannerError::FileSystem` if the directory cannot be
    /// created
    pub async fn build(self) -> Result<Planner> {
        let data_dir = match self.data_dir {
            Some(path) => path,
            None => Self::default_data_dir()?,
        };

        let store = task::spawn_blocking(move || Store::new(&data_dir)).await??;

        Ok(Planner::new(store))
    }

    /// Returns the default data directory following XDG Base Directory
    /// specification.
    fn default_data_dir() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("studyplan")
            .create_data_directory("")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
