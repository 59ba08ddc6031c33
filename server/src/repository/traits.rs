//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for task persistence.

use async_trait::async_trait;
use crate::domain::{DomainResult, Task, TaskTitle};

/// Durable collection of tasks
///
/// Update and delete report `DomainError::NotFound` for unknown ids.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a new, uncompleted task
    async fn create(&self, title: TaskTitle) -> DomainResult<Task>;

    /// Find task by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Task>>;

    /// All tasks, newest first
    async fn list(&self) -> DomainResult<Vec<Task>>;

    /// Set the completion flag and return the updated task
    async fn set_completed(&self, id: &str, completed: bool) -> DomainResult<Task>;

    /// Remove a task
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
