//! Task Repository Implementation
//!
//! SQLite-backed implementation of `TaskRepository`.

use async_trait::async_trait;
use chrono::DateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::traits::TaskRepository;
use crate::domain::{DomainError, DomainResult, Task, TaskTitle};

const SELECT_TASK: &str = "SELECT id, title, completed, created_at FROM tasks";

/// SQLite implementation of the task repository
pub struct TaskRepo {
    conn: Arc<Mutex<Connection>>,
}

impl TaskRepo {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Run `op` against the connection on the blocking pool.
    /// The lock is held until `op` returns.
    async fn with_conn<T, F>(&self, op: F) -> DomainResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> DomainResult<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn).lock_owned().await;
        tokio::task::spawn_blocking(move || op(&conn))
            .await
            .map_err(DomainError::internal)?
    }
}

#[async_trait]
impl TaskRepository for TaskRepo {
    async fn create(&self, title: TaskTitle) -> DomainResult<Task> {
        let task = Task::new(title);

        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO tasks (id, title, completed, created_at) VALUES (?1, ?2, ?3, ?4)",
                params![task.id, task.title, task.completed, task.created_at.timestamp_millis()],
            )
            .map_err(DomainError::internal)?;
            Ok(task)
        })
        .await
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Task>> {
        let id = id.to_string();
        self.with_conn(move |conn| find_task(conn, &id)).await
    }

    async fn list(&self) -> DomainResult<Vec<Task>> {
        self.with_conn(|conn| {
            // rowid breaks ties between inserts in the same millisecond
            let mut stmt = conn
                .prepare(&format!("{} ORDER BY created_at DESC, rowid DESC", SELECT_TASK))
                .map_err(DomainError::internal)?;
            let rows = stmt.query_map((), read_row).map_err(DomainError::internal)?;

            let tasks = rows
                .map(|row| row.map_err(DomainError::internal).and_then(Task::try_from))
                .collect::<DomainResult<Vec<_>>>();
            tasks
        })
        .await
    }

    async fn set_completed(&self, id: &str, completed: bool) -> DomainResult<Task> {
        let id = id.to_string();

        self.with_conn(move |conn| {
            let changed = conn
                .execute(
                    "UPDATE tasks SET completed = ?1 WHERE id = ?2",
                    params![completed, id],
                )
                .map_err(DomainError::internal)?;
            if changed == 0 {
                return Err(DomainError::NotFound(id));
            }

            find_task(conn, &id)?.ok_or(DomainError::NotFound(id))
        })
        .await
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let id = id.to_string();

        self.with_conn(move |conn| {
            let changed = conn
                .execute("DELETE FROM tasks WHERE id = ?1", params![id])
                .map_err(DomainError::internal)?;
            if changed == 0 {
                return Err(DomainError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn find_task(conn: &Connection, id: &str) -> DomainResult<Option<Task>> {
    conn.query_row(&format!("{} WHERE id = ?1", SELECT_TASK), params![id], read_row)
        .optional()
        .map_err(DomainError::internal)?
        .map(Task::try_from)
        .transpose()
}

/// Raw column values of one `tasks` row
struct TaskRow {
    id: String,
    title: String,
    completed: bool,
    created_at: i64,
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<TaskRow> {
    Ok(TaskRow {
        id: row.get(0)?,
        title: row.get(1)?,
        completed: row.get(2)?,
        created_at: row.get(3)?,
    })
}

impl TryFrom<TaskRow> for Task {
    type Error = DomainError;

    fn try_from(row: TaskRow) -> DomainResult<Self> {
        let created_at = DateTime::from_timestamp_millis(row.created_at)
            .ok_or_else(|| DomainError::Internal(format!("invalid created_at: {}", row.created_at)))?;
        Ok(Task {
            id: row.id,
            title: row.title,
            completed: row.completed,
            created_at,
        })
    }
}
