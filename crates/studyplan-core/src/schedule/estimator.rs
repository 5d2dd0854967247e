//! Difficulty based duration estimates.

use crate::models::{EstimatedTopic, Topic};

/// Minutes for a difficulty-1 topic.
pub const BASE_DURATION_MINUTES: u32 = 25;

/// Extra minutes per difficulty level above 1.
pub const DIFFICULTY_STEP_MINUTES: u32 = 10;

/// Estimate study minutes for a difficulty rating.
///
/// Ratings are not range checked. Difficulty 0 follows the same line and
/// gives 15 minutes, so every estimate stays positive.
///
/// ```rust
/// use studyplan_core::schedule::estimate;
///
/// assert_eq!(estimate(1), 25);
/// assert_eq!(estimate(5), 65);
/// assert_eq!(estimate(0), 15);
/// ```
pub fn estimate(difficulty: u8) -> u32 {
    (BASE_DURATION_MINUTES + u32::from(difficulty) * DIFFICULTY_STEP_MINUTES)
        - DIFFICULTY_STEP_MINUTES
}

/// Attach an estimate to every topic, keeping order.
pub fn estimate_topics(topics: Vec<Topic>) -> Vec<EstimatedTopic> {
    topics
        .into_iter()
        .map(|topic| EstimatedTopic {
            duration_minutes: estimate(topic.difficulty),
            topic,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_known_levels() {
        assert_eq!(estimate(1), 25);
        assert_eq!(estimate(2), 35);
        assert_eq!(estimate(3), 45);
        assert_eq!(estimate(4), 55);
        assert_eq!(estimate(5), 65);
    }

    #[test]
    fn test_estimate_zero_difficulty_extends_the_line() {
        assert_eq!(estimate(0), 15);
        assert_eq!(estimate(6), 75);
    }

    #[test]
    fn test_estimate_topics_preserves_order() {
        let topics = vec![
            Topic {
                subject: "Math".to_string(),
                title: "Algebra".to_string(),
                difficulty: 4,
            },
            Topic {
                subject: "Physics".to_string(),
                title: "Optics".to_string(),
                difficulty: 1,
            },
        ];

        let estimated = estimate_topics(topics);
        assert_eq!(estimated.len(), 2);
        assert_eq!(estimated[0].topic.title, "Algebra");
        assert_eq!(estimated[0].duration_minutes, 55);
        assert_eq!(estimated[1].topic.title, "Optics");
        assert_eq!(estimated[1].duration_minutes, 25);
    }
}
