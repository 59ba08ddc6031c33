//! Domain Layer
//!
//! Contains the task entity and core error types.
//! This layer has no storage or HTTP dependencies.

mod error;
mod task;

pub use error::{DomainError, DomainResult};
pub use task::{Task, TaskTitle};
