//! Profile and syllabus operations for the Planner.

use log::info;

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    models::{Syllabus, UserProfile},
    params::{ImportSyllabus, SetProfile},
    store::read_json,
};

impl Planner {
    /// Stores the learner profile, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Validation` for an empty name or a zero daily
    /// budget.
    pub async fn save_profile(&self, params: SetProfile) -> Result<UserProfile> {
        let profile = UserProfile::from(params);
        self.run_exclusive(move |store| {
            store.save_profile(&profile)?;
            Ok(profile)
        })
        .await
    }

    /// Loads the learner profile, if one exists.
    pub async fn load_profile(&self) -> Result<Option<UserProfile>> {
        self.run_blocking(|store| store.load_profile()).await
    }

    /// Reads a syllabus JSON file and stores it as the active syllabus.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::MissingInput` if the file does not exist,
    /// `PlannerError::Malformed` if it does not decode as a syllabus, and
    /// `PlannerError::Validation` if its contents are inconsistent.
    pub async fn import_syllabus(&self, params: &ImportSyllabus) -> Result<Syllabus> {
        let path = params.path.clone();
        self.run_exclusive(move |store| {
            let syllabus: Syllabus = read_json(&path)?.ok_or_else(|| PlannerError::MissingInput {
                what: format!("syllabus file {}", path.display()),
            })?;
            store.save_syllabus(&syllabus)?;
            Ok(syllabus)
        })
        .await
    }

    /// Loads the active syllabus, if one was imported.
    pub async fn load_syllabus(&self) -> Result<Option<Syllabus>> {
        let syllabus = self.run_blocking(|store| store.load_syllabus()).await?;
        if syllabus.is_none() {
            info!(target: "planner", "No syllabus has been imported yet");
        }
        Ok(syllabus)
    }
}
