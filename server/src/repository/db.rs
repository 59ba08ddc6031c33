//! Database Connection and Setup
//!
//! Opens the SQLite database and runs migrations.

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

const MEMORY_PATH: &str = ":memory:";

/// Shared database connection
#[derive(Clone)]
pub struct DbState {
    conn: Arc<Mutex<Connection>>,
    path: PathBuf,
}

impl DbState {
    /// Handle to the shared connection
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        self.conn.clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Open (or create) the database at `db_path` and migrate it
pub async fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let in_memory = db_path.as_os_str() == MEMORY_PATH;
    if !in_memory {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| DomainError::Internal(format!("Failed to create db dir: {}", e)))?;
        }
    }

    let conn = Connection::open(db_path)
        .map_err(|e| DomainError::Internal(format!("Failed to open db: {}", e)))?;

    if !in_memory {
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get::<_, String>(0))
            .map_err(|e| DomainError::Internal(format!("Failed to enable WAL: {}", e)))?;
    }

    run_migrations(&conn)?;
    tracing::debug!(path = %db_path.display(), "database ready");

    Ok(DbState {
        conn: Arc::new(Mutex::new(conn)),
        path: db_path.to_path_buf(),
    })
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS tasks (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER NOT NULL
        )",
        (),
    )
    .map_err(DomainError::internal)?;

    // Index backing the newest-first listing
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_tasks_created_at ON tasks(created_at DESC)",
        (),
    )
    .map_err(DomainError::internal)?;

    Ok(())
}
