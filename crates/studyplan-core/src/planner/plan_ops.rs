//! Plan operations for the Planner.

use std::collections::HashSet;

use jiff::civil::Date;
use log::{debug, info, warn};

use super::{today, Planner};
use crate::{
    error::{PlannerError, Result},
    models::{PlanContext, StudyTask, TaskStatus},
    params::{GeneratePlan, MarkTask, ShowDay, UpdateTaskStatus},
    schedule::{allocate, distribute, estimate_topics},
    store::Store,
};

impl Planner {
    /// Regenerates the whole plan from the stored profile and syllabus.
    ///
    /// The day count is checked before anything is read or written. A missing
    /// profile or syllabus is an expected state: it is logged and an empty
    /// task list is returned, leaving any existing plan in place.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Division` if `params.days` is not positive.
    pub async fn generate_plan(&self, params: &GeneratePlan) -> Result<Vec<StudyTask>> {
        let num_days = u32::try_from(params.days)
            .ok()
            .filter(|&days| days > 0)
            .ok_or(PlannerError::Division {
                num_days: params.days,
            })?;
        let start_date = params.start_date.unwrap_or_else(today);

        self.run_exclusive(move |store| generate(store, num_days, start_date))
            .await
    }

    /// Returns the tasks planned for a day (today by default).
    pub async fn show_day(&self, params: &ShowDay) -> Result<Vec<StudyTask>> {
        let date = params.date.unwrap_or_else(today);
        let tasks = self
            .run_blocking(move |store| store.tasks_for_date(date))
            .await?;
        debug!(target: "planner", "Fetched plan for {}: count={}", date, tasks.len());
        Ok(tasks)
    }

    /// Returns the full persisted plan.
    pub async fn all_tasks(&self) -> Result<Vec<StudyTask>> {
        Ok(self.run_blocking(Store::load_plan).await?.tasks)
    }

    /// Updates the status of the task keyed by (date, topic).
    ///
    /// Returns `Ok(false)` when no task matches; the plan is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Validation` for a status other than planned,
    /// done or skipped.
    pub async fn update_task_status(&self, params: &UpdateTaskStatus) -> Result<bool> {
        let status: TaskStatus = params.status.parse()?;
        let date = params.date;
        let topic = params.topic.clone();

        self.run_exclusive(move |store| store.update_status(date, &topic, status))
            .await
    }

    /// Updates the status of the n-th task (1-based) on a day.
    ///
    /// Returns the task as it was before the update.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Validation` for an invalid status or an index
    /// outside the day's task list.
    pub async fn mark_task(&self, params: &MarkTask) -> Result<StudyTask> {
        let status: TaskStatus = params.status.parse()?;
        let date = params.date.unwrap_or_else(today);
        let index = params.index;

        self.run_exclusive(move |store| {
            let tasks = store.tasks_for_date(date)?;
            let task = index
                .checked_sub(1)
                .and_then(|i| tasks.get(i))
                .cloned()
                .ok_or_else(|| {
                    PlannerError::validation("index").with_reason(format!(
                        "No task number {index} on {date} ({} planned)",
                        tasks.len()
                    ))
                })?;
            store.update_status(date, &task.topic, status)?;
            Ok(task)
        })
        .await
    }
}

fn generate(store: &Store, num_days: u32, start_date: Date) -> Result<Vec<StudyTask>> {
    let Some(profile) = store.load_profile()? else {
        warn!(
            target: "planner",
            "No user profile found. Please set up a profile first."
        );
        return Ok(Vec::new());
    };

    let Some(syllabus) = store.load_syllabus()? else {
        warn!(
            target: "planner",
            "No syllabus found in {}",
            store.root().display()
        );
        return Ok(Vec::new());
    };

    let context = PlanContext::from(&profile);
    if !context.subjects.is_empty() {
        let declared: HashSet<&str> = context.subjects.iter().map(String::as_str).collect();
        for subject in &syllabus.subjects {
            if !declared.contains(subject.name.as_str()) {
                debug!(
                    target: "planner",
                    "Syllabus subject not in profile: {:?}", subject.name
                );
            }
        }
    }

    let topics = estimate_topics(syllabus.topics());
    let total_minutes = topics
        .iter()
        .try_fold(0u32, |acc, t| acc.checked_add(t.duration_minutes))
        .ok_or_else(|| {
            PlannerError::validation("subjects").with_reason("Syllabus is too large to plan")
        })?;
    info!(
        target: "planner",
        "Total estimated study minutes for syllabus: total_minutes={} num_topics={}",
        total_minutes,
        topics.len()
    );

    let per_day = distribute(total_minutes, num_days)?;
    info!(
        target: "planner",
        "Minutes per day distribution computed: per_day={:?}", per_day
    );

    let tasks = allocate(&topics, &per_day, context.daily_cap, start_date)?;
    let allocated: u64 = tasks.iter().map(|t| u64::from(t.planned_minutes)).sum();
    if allocated < u64::from(total_minutes) {
        warn!(
            target: "planner",
            "Plan horizon too short for syllabus: unallocated_minutes={} daily_cap={}",
            u64::from(total_minutes) - allocated,
            context.daily_cap
        );
    }

    store.save_plan(&tasks)?;
    info!(
        target: "planner",
        "Study plan generated and saved: tasks={} start={} days={}",
        tasks.len(),
        start_date,
        num_days
    );

    Ok(tasks)
}
