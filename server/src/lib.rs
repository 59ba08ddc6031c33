//! FocusPulse Backend
//!
//! Layered architecture:
//! - domain: Task entity and domain errors
//! - repository: Data access abstraction and SQLite implementation
//! - api: axum handlers exposing the repository as JSON over HTTP
//! - config: TOML + environment configuration

use std::path::PathBuf;
use std::sync::Arc;

pub mod api;
pub mod config;
pub mod domain;
pub mod repository;

pub use config::ServerConfig;

use repository::{init_db, TaskRepo, TaskRepository};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub tasks: Arc<dyn TaskRepository>,
    pub static_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(tasks: Arc<dyn TaskRepository>, static_dir: PathBuf) -> Self {
        Self {
            tasks,
            static_dir: Arc::new(static_dir),
        }
    }
}

/// Open the database and assemble handler state from `config`
pub async fn build_state(config: &ServerConfig) -> Result<AppState, BoxError> {
    let db_state = init_db(&config.database_path).await?;
    tracing::info!(path = %db_state.path().display(), "database initialized");

    let repo = TaskRepo::new(db_state.connection());
    Ok(AppState::new(Arc::new(repo), config.static_dir.clone()))
}

/// Bind, serve until Ctrl-C, then shut down gracefully
pub async fn run(config: ServerConfig) -> Result<(), BoxError> {
    let state = build_state(&config).await?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(static_dir = %config.static_dir.display(), "FocusPulse listening on http://{local_addr}");

    axum::serve(listener, api::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("FocusPulse stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
