//! One-line feedback after a command changes (or declines to change) data.

use std::fmt;

/// Result line printed after a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationStatus {
    /// The requested change was made
    Success(String),
    /// Nothing matched, so nothing was written
    Unchanged(String),
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    pub fn unchanged(message: impl Into<String>) -> Self {
        Self::Unchanged(message.into())
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(message) => writeln!(f, "Success: {message}"),
            Self::Unchanged(message) => writeln!(f, "Unchanged: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lines() {
        let done = OperationStatus::success("Updated task 'Limits' on 2024-06-01 to status 'done'.");
        assert_eq!(
            done.to_string(),
            "Success: Updated task 'Limits' on 2024-06-01 to status 'done'.\n"
        );

        let miss = OperationStatus::unchanged(String::from("No task for 'Limits' on 2024-06-09."));
        assert!(miss.to_string().starts_with("Unchanged: No task"));
    }
}
