//! Static Asset Fallback
//!
//! Serves the built UI bundle for every non-API path.

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use percent_encoding::percent_decode_str;
use std::path::{Component, Path, PathBuf};

use crate::AppState;

const INDEX_FILE: &str = "index.html";

pub async fn serve_asset(State(state): State<AppState>, uri: Uri) -> Response {
    // Decode path (percent-decoded)
    let decoded = percent_decode_str(uri.path()).decode_utf8_lossy().to_string();

    let Some(path) = resolve_asset_path(&state.static_dir, &decoded) else {
        tracing::warn!(path = %decoded, "rejected asset path");
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => {}
        _ => return StatusCode::NOT_FOUND.into_response(),
    }

    match tokio::fs::read(&path).await {
        Ok(content) => {
            let mime_type = mime_guess::from_path(&path).first_or_octet_stream();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime_type.to_string())],
                content,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "failed to read asset");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Map a request path onto a file under `root`; `None` for anything that
/// could escape it.
fn resolve_asset_path(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = request_path.trim_start_matches('/');
    let relative = if relative.is_empty() { INDEX_FILE } else { relative };

    let relative = Path::new(relative);
    if !relative.components().all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }
    Some(root.join(relative))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_maps_to_index() {
        let root = Path::new("/srv/dist");
        assert_eq!(resolve_asset_path(root, "/"), Some(root.join("index.html")));
        assert_eq!(resolve_asset_path(root, ""), Some(root.join("index.html")));
    }

    #[test]
    fn test_nested_asset() {
        let root = Path::new("/srv/dist");
        assert_eq!(
            resolve_asset_path(root, "/assets/app_bg.wasm"),
            Some(root.join("assets/app_bg.wasm"))
        );
    }

    #[test]
    fn test_traversal_rejected() {
        let root = Path::new("/srv/dist");
        assert_eq!(resolve_asset_path(root, "/../secret.txt"), None);
        assert_eq!(resolve_asset_path(root, "/assets/../../etc/passwd"), None);
        assert_eq!(resolve_asset_path(root, "/./index.html"), None);
    }
}
