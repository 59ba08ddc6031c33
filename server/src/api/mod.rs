//! HTTP Layer
//!
//! JSON task endpoints under `/api`, everything else served from the static
//! asset directory.

mod assets;
mod error;
mod task_handlers;

pub use error::ApiError;

use axum::routing::{get, patch};
use axum::{Json, Router};

use crate::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route(
            "/tasks",
            get(task_handlers::list_tasks).post(task_handlers::create_task),
        )
        .route(
            "/tasks/{id}",
            patch(task_handlers::update_task).delete(task_handlers::delete_task),
        );

    Router::new()
        .nest("/api", api)
        .fallback(assets::serve_asset)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
