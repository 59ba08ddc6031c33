//! Backend Command Wrappers
//!
//! Frontend bindings to the REST API, organized by domain.

mod task;

use thiserror::Error;

use crate::models::ErrorBody;

// Re-export all public items
pub use task::*;

const API_PREFIX: &str = "/api";

/// Absolute URL for an API path (reqwest needs a base on wasm32)
fn api_url(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{}{}{}", origin, API_PREFIX, path)
}

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The server has no such record (HTTP 404)
    #[error("HTTP 404: {0}")]
    NotFound(String),
    #[error("{0}")]
    Other(String),
}

impl CommandError {
    fn from_status(status: u16, message: Option<String>) -> Self {
        match (status, message) {
            (404, Some(msg)) => CommandError::NotFound(msg),
            (404, None) => CommandError::NotFound("not found".to_string()),
            (_, Some(msg)) => CommandError::Other(format!("HTTP {}: {}", status, msg)),
            (_, None) => CommandError::Other(format!("HTTP {}", status)),
        }
    }
}

impl From<reqwest::Error> for CommandError {
    fn from(err: reqwest::Error) -> Self {
        CommandError::Other(err.to_string())
    }
}

/// Turn a non-2xx response into a `CommandError`, keeping the status
async fn response_error(resp: reqwest::Response) -> CommandError {
    let status = resp.status().as_u16();
    let message = resp.json::<ErrorBody>().await.ok().map(|body| body.error);
    CommandError::from_status(status, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_keeps_server_message() {
        let err = CommandError::from_status(404, Some("task not found: b".to_string()));
        assert_eq!(err, CommandError::NotFound("task not found: b".to_string()));
        assert_eq!(err.to_string(), "HTTP 404: task not found: b");
    }

    #[test]
    fn test_other_statuses() {
        let err = CommandError::from_status(400, Some("title required".to_string()));
        assert_eq!(err.to_string(), "HTTP 400: title required");
        assert!(matches!(CommandError::from_status(500, None), CommandError::Other(_)));
        assert!(matches!(CommandError::from_status(404, None), CommandError::NotFound(_)));
    }
}
