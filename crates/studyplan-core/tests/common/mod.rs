use std::path::PathBuf;

use studyplan_core::{params::SetProfile, Planner, PlannerBuilder};
use tempfile::TempDir;

/// Helper function to create a test planner over a fresh data directory
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let planner = PlannerBuilder::new()
        .with_data_dir(Some(temp_dir.path().join("data")))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Profile with the given daily budget
pub fn test_profile(daily_study_minutes: u32) -> SetProfile {
    SetProfile {
        name: "Ada".to_string(),
        grade: "11".to_string(),
        subjects: vec!["Math".to_string(), "Physics".to_string()],
        daily_study_minutes,
        preference: "evening".to_string(),
    }
}

/// Writes a syllabus file next to the data directory and returns its path
#[allow(dead_code)]
pub fn write_syllabus(temp_dir: &TempDir, body: &str) -> PathBuf {
    let path = temp_dir.path().join("syllabus-input.json");
    std::fs::write(&path, body).expect("Failed to write syllabus");
    path
}

/// Two subjects, three topics: 35 + 45 + 65 = 145 minutes
#[allow(dead_code)]
pub const SAMPLE_SYLLABUS: &str = r#"{
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
            "topics": [
                {"title": "Optics", "difficulty": 5}
            ]
        }
    ]
}"#;
