//! Task Entity
//!
//! A to-do entry shown next to the timer. Only `completed` changes after
//! creation.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{DomainError, DomainResult};

/// A task as stored and as sent over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque server-assigned identifier
    pub id: String,
    /// Trimmed, never empty
    pub title: String,
    pub completed: bool,
    /// Insert time, millisecond precision; drives newest-first ordering
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a fresh, uncompleted task with a new identifier
    pub fn new(title: TaskTitle) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into_inner(),
            completed: false,
            // Stored as epoch millis, so drop sub-millisecond precision up front.
            created_at: Utc::now().trunc_subsecs(3),
        }
    }
}

/// A validated task title: trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTitle(String);

impl TaskTitle {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidInput("title required".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_trimmed() {
        let title = TaskTitle::parse("  Write report \n").unwrap();
        assert_eq!(title.as_str(), "Write report");
    }

    #[test]
    fn test_blank_title_rejected() {
        for raw in ["", "   ", "\t\n"] {
            assert_eq!(
                TaskTitle::parse(raw),
                Err(DomainError::InvalidInput("title required".to_string()))
            );
        }
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new(TaskTitle::parse("Read").unwrap());
        assert_eq!(task.title, "Read");
        assert!(!task.completed);
        assert!(Uuid::parse_str(&task.id).is_ok());
        assert_eq!(task.created_at.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn test_new_tasks_get_distinct_ids() {
        let a = Task::new(TaskTitle::parse("a").unwrap());
        let b = Task::new(TaskTitle::parse("a").unwrap());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_json_shape_is_camel_case() {
        let task = Task::new(TaskTitle::parse("Read").unwrap());
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["title"], "Read");
        assert_eq!(json["completed"], false);
        assert!(json["createdAt"].is_string());
        assert!(json.get("created_at").is_none());
    }
}
