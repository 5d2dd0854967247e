#[cfg(test)]
mod model_tests {
    use std::collections::BTreeMap;

    use jiff::civil::date;
    use serde_json::json;

    use crate::{
        display::{DayPlan, PlanOverview},
        error::PlannerError,
        models::{
            PlanContext, ProgressSummary, StudyPlan, StudyTask, SubjectProgress, Syllabus,
            TaskStatus, UserProfile,
        },
    };

    fn create_test_task(topic: &str, day: i8, status: TaskStatus) -> StudyTask {
        StudyTask {
            subject: "Math".to_string(),
            topic: topic.to_string(),
            date: date(2024, 6, day),
            planned_minutes: 30,
            status,
        }
    }

    fn create_test_syllabus() -> Syllabus {
        serde_json::from_value(json!({
            "subjects": [
                {
                    "name": "Math",
                    "topics": [
                        {"title": "Fractions", "difficulty": 2},
                        {"title": "Algebra"}
                    ]
                },
                {
                    "name": "Physics",
                    "topics": [{"title": "Optics", "difficulty": 5}]
                }
            ]
        }))
        .expect("valid syllabus")
    }

    #[test]
    fn test_task_status_parsing() {
        assert_eq!("done".parse::<TaskStatus>().unwrap(), TaskStatus::Done);
        assert_eq!("Skipped".parse::<TaskStatus>().unwrap(), TaskStatus::Skipped);
        assert_eq!(" planned ".parse::<TaskStatus>().unwrap(), TaskStatus::Planned);

        let err = "finished".parse::<TaskStatus>().unwrap_err();
        assert!(matches!(err, PlannerError::Validation { ref field, .. } if field == "status"));
    }

    #[test]
    fn test_task_serializes_to_storage_format() {
        let task = create_test_task("Fractions", 1, TaskStatus::Done);
        let value = serde_json::to_value(&task).unwrap();

        assert_eq!(
            value,
            json!({
                "subject": "Math",
                "topic": "Fractions",
                "date": "2024-06-01",
                "planned_minutes": 30,
                "status": "done"
            })
        );
    }

    #[test]
    fn test_plan_json_round_trip() {
        let plan = StudyPlan::new(vec![
            create_test_task("Fractions", 1, TaskStatus::Planned),
            create_test_task("Fractions", 2, TaskStatus::Skipped),
            create_test_task("Algebra", 2, TaskStatus::Done),
        ]);

        let encoded = serde_json::to_string(&plan).unwrap();
        assert!(encoded.starts_with("{\"tasks\":["));
        let decoded: StudyPlan = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, plan);
    }

    #[test]
    fn test_unknown_status_in_file_is_rejected() {
        let result = serde_json::from_value::<StudyTask>(json!({
            "subject": "Math",
            "topic": "Fractions",
            "date": "2024-06-01",
            "planned_minutes": 30,
            "status": "finished"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_plan_set_status_first_match_only() {
        let mut plan = StudyPlan::new(vec![
            create_test_task("Fractions", 1, TaskStatus::Planned),
            create_test_task("Fractions", 2, TaskStatus::Planned),
        ]);

        assert!(plan.set_status(date(2024, 6, 1), "Fractions", TaskStatus::Done));
        assert!(!plan.set_status(date(2024, 6, 3), "Fractions", TaskStatus::Done));
        assert_eq!(plan.tasks[0].status, TaskStatus::Done);
        assert_eq!(plan.tasks[1].status, TaskStatus::Planned);
        assert_eq!(plan.total_minutes(), 60);
    }

    #[test]
    fn test_syllabus_defaults_and_flattening() {
        let syllabus = create_test_syllabus();
        let topics = syllabus.topics();

        assert_eq!(syllabus.topic_count(), 3);
        let titles: Vec<&str> = topics.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Fractions", "Algebra", "Optics"]);
        assert_eq!(topics[1].difficulty, 3);
        assert_eq!(topics[2].subject, "Physics");
        assert!(syllabus.validate().is_ok());
    }

    #[test]
    fn test_syllabus_rejects_duplicate_titles() {
        let syllabus: Syllabus = serde_json::from_value(json!({
            "subjects": [
                {"name": "Math", "topics": [{"title": "Introduction"}]},
                {"name": "Physics", "topics": [{"title": "Introduction"}]}
            ]
        }))
        .unwrap();

        let err = syllabus.validate().unwrap_err();
        assert!(err.to_string().contains("Introduction"));
    }

    #[test]
    fn test_syllabus_rejects_blank_subject() {
        let syllabus: Syllabus =
            serde_json::from_value(json!({"subjects": [{"name": "  ", "topics": []}]})).unwrap();
        assert!(syllabus.validate().is_err());
    }

    #[test]
    fn test_syllabus_missing_subject_name_fails_to_decode() {
        let result = serde_json::from_value::<Syllabus>(json!({
            "subjects": [{"topics": [{"title": "Fractions"}]}]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_plan_context_from_profile() {
        let profile = UserProfile {
            name: "Ada".to_string(),
            grade: "11".to_string(),
            subjects: vec!["Math".to_string()],
            daily_study_minutes: 90,
            preference: "morning".to_string(),
        };

        let context = PlanContext::from(&profile);
        assert_eq!(context.daily_cap, 90);
        assert_eq!(context.subjects, vec!["Math"]);
    }

    #[test]
    fn test_profile_validation() {
        let mut profile = UserProfile {
            name: "".to_string(),
            grade: String::new(),
            subjects: vec![],
            daily_study_minutes: 60,
            preference: String::new(),
        };
        assert!(profile.validate().is_err());

        profile.name = "Ada".to_string();
        assert!(profile.validate().is_ok());

        profile.daily_study_minutes = 0;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_task_display() {
        let task = create_test_task("Fractions", 1, TaskStatus::Skipped);
        assert_eq!(
            format!("{task}"),
            "- [✗ Skipped] Math - Fractions (30 min) on 2024-06-01\n"
        );
    }

    #[test]
    fn test_day_plan_display() {
        let day = DayPlan {
            date: date(2024, 6, 2),
            tasks: vec![
                create_test_task("Fractions", 2, TaskStatus::Done),
                create_test_task("Algebra", 2, TaskStatus::Planned),
            ],
        };
        let output = format!("{day}");

        assert!(output.contains("# Plan for 2024-06-02 (60 min)"));
        assert!(output.contains("1. [✓ Done] Math - Fractions (30 min)"));
        assert!(output.contains("2. [○ Planned] Math - Algebra (30 min)"));
    }

    #[test]
    fn test_empty_day_plan_display() {
        let day = DayPlan {
            date: date(2024, 6, 2),
            tasks: vec![],
        };
        assert!(format!("{day}").contains("No tasks planned for 2024-06-02"));
    }

    #[test]
    fn test_plan_overview_groups_by_day() {
        let overview = PlanOverview(vec![
            create_test_task("Fractions", 1, TaskStatus::Planned),
            create_test_task("Fractions", 2, TaskStatus::Planned),
            create_test_task("Algebra", 2, TaskStatus::Planned),
        ]);
        let output = format!("{overview}");

        assert_eq!(overview.day_count(), 2);
        assert!(output.contains("# Study Plan (3 tasks over 2 days, 90 min)"));
        assert_eq!(output.matches("## 2024-06-02").count(), 1);
    }

    #[test]
    fn test_progress_summary_display() {
        let mut subjects = BTreeMap::new();
        subjects.insert("Math".to_string(), SubjectProgress { seen: 4, done: 3 });
        let summary = ProgressSummary {
            window_days: 7,
            reference_date: date(2024, 6, 8),
            total_tasks: 4,
            done: 3,
            skipped: 1,
            completion_rate: 75.0,
            subjects,
        };
        let output = format!("{summary}");

        assert!(output.contains("- **Completion rate**: 75.0%"));
        assert!(output.contains("- Math: 3/4 completed"));
    }
}
