//! Frontend Models
//!
//! Wire types matching the backend JSON, plus the client-side cache entry.

use serde::{Deserialize, Serialize};

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    /// RFC 3339; only used for ordering on the server
    #[serde(default)]
    pub created_at: String,
}

/// `GET /api/tasks` response
#[derive(Debug, Clone, Deserialize)]
pub struct TasksBody {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// `POST`/`PATCH` response; `task` is absent on failure
#[derive(Debug, Clone, Deserialize)]
pub struct TaskBody {
    pub task: Option<Task>,
    pub error: Option<String>,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Whether the cached copy agrees with the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SyncStatus {
    #[default]
    Synced,
    /// A mutation is in flight
    Pending,
    /// Last mutation failed and was rolled back
    Failed(String),
}

/// A cached task with its sync status
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskEntry {
    pub task: Task,
    pub status: SyncStatus,
}

impl TaskEntry {
    pub fn synced(task: Task) -> Self {
        Self {
            task,
            status: SyncStatus::Synced,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == SyncStatus::Pending
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SyncStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_from_server_json() {
        let json = r#"{"id":"a1","title":"Write report","completed":false,"createdAt":"2026-01-02T03:04:05.678Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "a1");
        assert_eq!(task.title, "Write report");
        assert!(!task.completed);
        assert_eq!(task.created_at, "2026-01-02T03:04:05.678Z");
    }

    #[test]
    fn test_task_body_without_task() {
        let body: TaskBody = serde_json::from_str(r#"{"error":"title required"}"#).unwrap();
        assert!(body.task.is_none());
        assert_eq!(body.error.as_deref(), Some("title required"));
    }

    #[test]
    fn test_tasks_body_defaults_to_empty() {
        let body: TasksBody = serde_json::from_str("{}").unwrap();
        assert!(body.tasks.is_empty());
    }
}
