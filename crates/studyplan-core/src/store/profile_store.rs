//! Persisted profile and syllabus records.

use log::info;

use super::{utils, Store, PROFILE_FILE, SYLLABUS_FILE};
use crate::{
    error::Result,
    models::{Syllabus, UserProfile},
};

impl Store {
    /// Validates and persists the learner profile.
    pub fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        profile.validate()?;
        utils::write_json(&self.file(PROFILE_FILE), profile)?;
        info!(
            target: "profile",
            "User profile saved: name={:?} daily_study_minutes={} subjects={:?}",
            profile.name,
            profile.daily_study_minutes,
            profile.subjects
        );
        Ok(())
    }

    /// Loads the learner profile, if one has been saved.
    ///
    /// A hand-edited file is held to the same rules as [`Store::save_profile`].
    pub fn load_profile(&self) -> Result<Option<UserProfile>> {
        let profile: Option<UserProfile> = utils::read_json(&self.file(PROFILE_FILE))?;
        match &profile {
            Some(p) => {
                p.validate()?;
                info!(target: "profile", "Loaded existing profile: name={:?}", p.name);
            }
            None => info!(target: "profile", "No existing profile found"),
        }
        Ok(profile)
    }

    /// Validates and persists the syllabus.
    pub fn save_syllabus(&self, syllabus: &Syllabus) -> Result<()> {
        syllabus.validate()?;
        utils::write_json(&self.file(SYLLABUS_FILE), syllabus)?;
        info!(
            target: "profile",
            "Syllabus saved: subjects={} topics={}",
            syllabus.subjects.len(),
            syllabus.topic_count()
        );
        Ok(())
    }

    /// Loads the stored syllabus, if one has been imported.
    ///
    /// The file is re-validated, so duplicate topic titles written by hand are
    /// rejected before they can reach the allocator.
    pub fn load_syllabus(&self) -> Result<Option<Syllabus>> {
        let syllabus: Option<Syllabus> = utils::read_json(&self.file(SYLLABUS_FILE))?;
        if let Some(syllabus) = &syllabus {
            syllabus.validate()?;
        }
        Ok(syllabus)
    }
}
