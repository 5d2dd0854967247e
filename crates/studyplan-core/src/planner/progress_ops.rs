//! Progress reporting for the Planner.

use log::info;

use super::{today, Planner};
use crate::{error::Result, models::ProgressSummary, params::SummarizeProgress, progress};

impl Planner {
    /// Summarizes completion over the trailing window of days.
    pub async fn summarize_progress(&self, params: &SummarizeProgress) -> Result<ProgressSummary> {
        let reference_date = params.reference_date.unwrap_or_else(today);
        let window_days = params.window_days;

        let plan = self.run_blocking(|store| store.load_plan()).await?;
        let summary = progress::evaluate(&plan.tasks, window_days, reference_date);

        if summary.is_empty() {
            info!(target: "progress", "No tasks to evaluate: window_days={}", window_days);
        } else {
            info!(
                target: "progress",
                "Progress summary: total={} done={} skipped={} completion_rate={:.1}",
                summary.total_tasks,
                summary.done,
                summary.skipped,
                summary.completion_rate
            );
        }

        Ok(summary)
    }
}
