//! Repository Layer
//!
//! Data access abstractions and the SQLite implementation.

mod traits;
mod db;
mod task_repo;


pub use traits::TaskRepository;
pub use db::{init_db, DbState};
pub use task_repo::TaskRepo;
