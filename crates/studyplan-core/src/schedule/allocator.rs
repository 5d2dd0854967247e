//! Greedy day-by-day allocation of estimated topics into dated tasks.
//!
//! The allocator walks the days in order and fills each one from the front
//! of the topic list. A topic that does not fit in what is left of a day is
//! split: the part that fits becomes a task on that day and the rest carries
//! over to the next day. Days are never borrowed from in advance, so a day
//! whose share is zero receives nothing even if topics remain.

use jiff::{civil::Date, Span};

use crate::{
    error::Result,
    models::{EstimatedTopic, StudyTask, TaskStatus},
};

/// Position in the topic list plus the minutes still owed to that topic.
struct TopicCursor<'a> {
    topics: &'a [EstimatedTopic],
    index: usize,
    remaining: u32,
}

impl<'a> TopicCursor<'a> {
    fn new(topics: &'a [EstimatedTopic]) -> Self {
        let mut cursor = Self {
            topics,
            index: 0,
            remaining: topics.first().map_or(0, |t| t.duration_minutes),
        };
        cursor.skip_empty();
        cursor
    }

    fn current(&self) -> Option<&'a EstimatedTopic> {
        self.topics.get(self.index)
    }

    fn is_exhausted(&self) -> bool {
        self.index >= self.topics.len()
    }

    fn consume(&mut self, minutes: u32) {
        self.remaining -= minutes;
        if self.remaining == 0 {
            self.advance();
        }
    }

    fn advance(&mut self) {
        self.index += 1;
        self.remaining = self.current().map_or(0, |t| t.duration_minutes);
        self.skip_empty();
    }

    // Zero-minute topics would produce zero-minute tasks.
    fn skip_empty(&mut self) {
        while self.remaining == 0 && !self.is_exhausted() {
            self.index += 1;
            self.remaining = self.current().map_or(0, |t| t.duration_minutes);
        }
    }
}

/// Allocate `topics` over the days described by `distributed`.
///
/// Day `d` is `start_date + d` and may use at most
/// `min(distributed[d], daily_cap)` minutes. Topics keep their order; a topic
/// longer than the room left in a day spans consecutive days. Topics that do
/// not fit before the last day are left out of the result.
///
/// # Errors
///
/// Returns `PlannerError::DateRange` if a task date would fall outside the
/// supported calendar range.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use studyplan_core::models::{EstimatedTopic, Topic};
/// use studyplan_core::schedule::allocate;
///
/// let topics = vec![EstimatedTopic {
///     topic: Topic {
///         subject: "Math".to_string(),
///         title: "Limits".to_string(),
///         difficulty: 3,
///     },
///     duration_minutes: 50,
/// }];
///
/// let tasks = allocate(&topics, &[30, 30], 100, date(2024, 6, 1)).unwrap();
/// assert_eq!(tasks.len(), 2);
/// assert_eq!(tasks[0].planned_minutes, 30);
/// assert_eq!(tasks[1].planned_minutes, 20);
/// assert_eq!(tasks[1].date, date(2024, 6, 2));
/// ```
pub fn allocate(
    topics: &[EstimatedTopic],
    distributed: &[u32],
    daily_cap: u32,
    start_date: Date,
) -> Result<Vec<StudyTask>> {
    let mut tasks = Vec::new();
    let mut cursor = TopicCursor::new(topics);

    for (day_index, &share) in distributed.iter().enumerate() {
        if cursor.is_exhausted() {
            break;
        }

        let date = Span::new()
            .try_days(day_index as i64)
            .and_then(|span| start_date.checked_add(span))?;
        let mut available = share.min(daily_cap);

        while available > 0 {
            let Some(current) = cursor.current() else {
                break;
            };

            let allocated = cursor.remaining.min(available);
            tasks.push(StudyTask {
                subject: current.topic.subject.clone(),
                topic: current.topic.title.clone(),
                date,
                planned_minutes: allocated,
                status: TaskStatus::Planned,
            });

            available -= allocated;
            cursor.consume(allocated);
        }
    }

    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use jiff::{civil::date, ToSpan};
    use proptest::prelude::*;

    use super::*;
    use crate::{error::PlannerError, models::Topic, schedule::distribute};

    fn topic(subject: &str, title: &str, minutes: u32) -> EstimatedTopic {
        EstimatedTopic {
            topic: Topic {
                subject: subject.to_string(),
                title: title.to_string(),
                difficulty: 3,
            },
            duration_minutes: minutes,
        }
    }

    fn summary(tasks: &[StudyTask]) -> Vec<(String, Date, u32)> {
        tasks
            .iter()
            .map(|t| (t.topic.clone(), t.date, t.planned_minutes))
            .collect()
    }

    #[test]
    fn test_topic_carries_over_to_next_day() {
        let topics = vec![topic("Math", "Limits", 50)];
        let tasks = allocate(&topics, &[30, 30], 100, date(2024, 6, 1)).unwrap();

        assert_eq!(
            summary(&tasks),
            vec![
                ("Limits".to_string(), date(2024, 6, 1), 30),
                ("Limits".to_string(), date(2024, 6, 2), 20),
            ]
        );
        assert!(tasks.iter().all(|t| t.status == TaskStatus::Planned));
        assert!(tasks.iter().all(|t| t.subject == "Math"));
    }

    #[test]
    fn test_empty_topics_produce_no_tasks() {
        let tasks = allocate(&[], &[30, 30, 30], 60, date(2024, 6, 1)).unwrap();
        assert!(tasks.is_empty());

        let tasks = allocate(&[], &[], 60, date(2024, 6, 1)).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_daily_cap_limits_each_day() {
        let topics = vec![topic("Math", "Algebra", 45), topic("Math", "Geometry", 25)];
        let shares = distribute(70, 2).unwrap();
        let tasks = allocate(&topics, &shares, 30, date(2024, 6, 1)).unwrap();

        assert_eq!(
            summary(&tasks),
            vec![
                ("Algebra".to_string(), date(2024, 6, 1), 30),
                ("Algebra".to_string(), date(2024, 6, 2), 15),
                ("Geometry".to_string(), date(2024, 6, 2), 15),
            ]
        );
    }

    #[test]
    fn test_many_small_topics_share_one_day() {
        let topics = vec![
            topic("Math", "A", 25),
            topic("Physics", "B", 25),
            topic("Chemistry", "C", 25),
        ];
        let tasks = allocate(&topics, &[75], 120, date(2024, 6, 1)).unwrap();

        assert_eq!(tasks.len(), 3);
        assert!(tasks.iter().all(|t| t.date == date(2024, 6, 1)));
        assert_eq!(tasks[1].subject, "Physics");
        assert_eq!(tasks[2].planned_minutes, 25);
    }

    #[test]
    fn test_zero_share_days_receive_nothing() {
        let topics = vec![topic("Math", "Limits", 25)];
        let shares = distribute(2, 5).unwrap();
        let tasks = allocate(&topics, &shares, 60, date(2024, 6, 1)).unwrap();

        assert_eq!(
            summary(&tasks),
            vec![
                ("Limits".to_string(), date(2024, 6, 1), 1),
                ("Limits".to_string(), date(2024, 6, 2), 1),
            ]
        );
    }

    #[test]
    fn test_zero_minute_topics_are_skipped() {
        let topics = vec![
            topic("Math", "Empty", 0),
            topic("Math", "Limits", 25),
            topic("Math", "Also empty", 0),
            topic("Math", "Series", 25),
        ];
        let tasks = allocate(&topics, &[50], 60, date(2024, 6, 1)).unwrap();

        assert_eq!(
            summary(&tasks),
            vec![
                ("Limits".to_string(), date(2024, 6, 1), 25),
                ("Series".to_string(), date(2024, 6, 1), 25),
            ]
        );
    }

    #[test]
    fn test_dates_cross_month_boundary() {
        let topics = vec![topic("Math", "Limits", 90)];
        let tasks = allocate(&topics, &[30, 30, 30], 30, date(2024, 1, 30)).unwrap();

        let dates: Vec<Date> = tasks.iter().map(|t| t.date).collect();
        assert_eq!(dates, vec![date(2024, 1, 30), date(2024, 1, 31), date(2024, 2, 1)]);
    }

    #[test]
    fn test_leftover_topics_are_dropped_when_horizon_ends() {
        let topics = vec![topic("Math", "Limits", 45), topic("Math", "Series", 45)];
        let tasks = allocate(&topics, &[45], 60, date(2024, 6, 1)).unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].topic, "Limits");
    }

    #[test]
    fn test_dates_past_calendar_end_are_an_error() {
        let topics = vec![topic("Math", "Limits", 90)];
        let err = allocate(&topics, &[30, 30, 30], 30, date(9999, 12, 30)).unwrap_err();
        assert!(matches!(err, PlannerError::DateRange { .. }));
    }

    proptest! {
        #[test]
        fn prop_each_topic_receives_exactly_its_estimate(
            durations in proptest::collection::vec(1u32..200, 0..20),
            days in 1u32..30,
            extra_cap in 0u32..50,
        ) {
            let topics: Vec<EstimatedTopic> = durations
                .iter()
                .enumerate()
                .map(|(i, &m)| topic("Subject", &format!("t{i}"), m))
                .collect();
            let total: u32 = durations.iter().sum();
            let shares = distribute(total, days).unwrap();
            let cap = shares.iter().copied().max().unwrap_or(0) + extra_cap;
            let start = date(2024, 6, 1);

            let tasks = allocate(&topics, &shares, cap, start).unwrap();

            let mut per_topic: HashMap<&str, u32> = HashMap::new();
            for task in &tasks {
                prop_assert!(task.planned_minutes > 0);
                *per_topic.entry(task.topic.as_str()).or_default() += task.planned_minutes;
            }
            for (i, &minutes) in durations.iter().enumerate() {
                prop_assert_eq!(per_topic.get(format!("t{i}").as_str()).copied(), Some(minutes));
            }

            let last = start.checked_add(i64::from(days - 1).days()).unwrap();
            prop_assert!(tasks.iter().all(|t| t.date >= start && t.date <= last));
        }

        #[test]
        fn prop_never_over_allocates(
            durations in proptest::collection::vec(1u32..200, 0..20),
            shares in proptest::collection::vec(0u32..120, 1..30),
            cap in 1u32..120,
        ) {
            let topics: Vec<EstimatedTopic> = durations
                .iter()
                .enumerate()
                .map(|(i, &m)| topic("Subject", &format!("t{i}"), m))
                .collect();

            let tasks = allocate(&topics, &shares, cap, date(2024, 6, 1)).unwrap();

            let mut per_day: HashMap<Date, u32> = HashMap::new();
            let mut per_topic: HashMap<&str, u32> = HashMap::new();
            for task in &tasks {
                *per_day.entry(task.date).or_default() += task.planned_minutes;
                *per_topic.entry(task.topic.as_str()).or_default() += task.planned_minutes;
            }
            prop_assert!(per_day.values().all(|&m| m <= cap));
            for (i, &minutes) in durations.iter().enumerate() {
                let allocated = per_topic.get(format!("t{i}").as_str()).copied().unwrap_or(0);
                prop_assert!(allocated <= minutes);
            }
        }
    }
}
