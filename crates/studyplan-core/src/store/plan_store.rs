//! Persisted plan queries.

use jiff::civil::Date;
use log::{debug, info};

use super::{utils, Store, PLAN_FILE};
use crate::{
    error::Result,
    models::{StudyPlan, StudyTask, TaskStatus},
};

impl Store {
    /// Replaces any persisted plan with `tasks`.
    pub fn save_plan(&self, tasks: &[StudyTask]) -> Result<()> {
        let plan = StudyPlan::new(tasks.to_vec());
        utils::write_json(&self.file(PLAN_FILE), &plan)?;
        info!(target: "plan_store", "Study plan saved: tasks={}", tasks.len());
        Ok(())
    }

    /// Loads the persisted plan, or an empty plan if none was generated yet.
    pub fn load_plan(&self) -> Result<StudyPlan> {
        Ok(utils::read_json(&self.file(PLAN_FILE))?.unwrap_or_default())
    }

    /// Returns all tasks dated `date`, in plan order.
    pub fn tasks_for_date(&self, date: Date) -> Result<Vec<StudyTask>> {
        Ok(self.load_plan()?.tasks_for_date(date))
    }

    /// Sets the status of the first task keyed by (`date`, `topic`).
    ///
    /// Returns `Ok(false)` and leaves the file untouched when no task matches.
    pub fn update_status(&self, date: Date, topic: &str, status: TaskStatus) -> Result<bool> {
        let mut plan = self.load_plan()?;

        if !plan.set_status(date, topic, status) {
            debug!(
                target: "plan_store",
                "No task to update: date={} topic={:?}", date, topic
            );
            return Ok(false);
        }

        utils::write_json(&self.file(PLAN_FILE), &plan)?;
        info!(
            target: "plan_store",
            "Updated task status: date={} topic={:?} status={}", date, topic, status
        );
        Ok(true)
    }
}
