//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The cache
//! reconciliation rules are plain functions over `Vec<TaskEntry>` so they can
//! be tested without a reactive runtime.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::CommandError;
use crate::models::{SyncStatus, Task, TaskEntry};
use crate::timer::TimerSession;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Client-side copy of the task list
    pub tasks: Vec<TaskEntry>,
    /// Pomodoro countdown
    pub timer: TimerSession,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// An entry taken out of the list by an optimistic delete
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedTask {
    index: usize,
    entry: TaskEntry,
}

// ========================
// Cache Reconciliation
// ========================

/// Replace the whole cache with a fresh server listing
pub fn replace_tasks(entries: &mut Vec<TaskEntry>, tasks: Vec<Task>) {
    *entries = tasks.into_iter().map(TaskEntry::synced).collect();
}

/// Append a task the server just created
pub fn append_task(entries: &mut Vec<TaskEntry>, task: Task) {
    if entries.iter().any(|e| e.task.id == task.id) {
        return;
    }
    entries.push(TaskEntry::synced(task));
}

/// Flip `completed` locally and mark the entry pending.
/// Returns the value to send, or `None` if the entry is missing or busy.
pub fn begin_toggle(entries: &mut [TaskEntry], id: &str) -> Option<bool> {
    let entry = entries.iter_mut().find(|e| e.task.id == id)?;
    if entry.is_pending() {
        return None;
    }
    entry.task.completed = !entry.task.completed;
    entry.status = SyncStatus::Pending;
    Some(entry.task.completed)
}

/// Apply the server's answer to a toggle started with `begin_toggle`.
/// A task the server no longer has is dropped from the cache.
pub fn settle_toggle(
    entries: &mut Vec<TaskEntry>,
    id: &str,
    requested: bool,
    result: Result<Task, CommandError>,
) {
    let Some(index) = entries.iter().position(|e| e.task.id == id) else {
        return;
    };
    match result {
        Ok(task) => entries[index] = TaskEntry::synced(task),
        Err(CommandError::NotFound(_)) => {
            entries.remove(index);
        }
        Err(err) => {
            let entry = &mut entries[index];
            entry.task.completed = !requested;
            entry.status = SyncStatus::Failed(err.to_string());
        }
    }
}

/// Remove an entry locally, remembering where it was.
/// Returns `None` if the entry is missing or busy.
pub fn begin_delete(entries: &mut Vec<TaskEntry>, id: &str) -> Option<RemovedTask> {
    let index = entries.iter().position(|e| e.task.id == id)?;
    if entries[index].is_pending() {
        return None;
    }
    let entry = entries.remove(index);
    Some(RemovedTask { index, entry })
}

/// Apply the server's answer to a delete. Failures put the entry back,
/// except NotFound: the task is already gone on the server.
pub fn settle_delete(entries: &mut Vec<TaskEntry>, removed: RemovedTask, result: Result<(), CommandError>) {
    match result {
        Ok(()) | Err(CommandError::NotFound(_)) => {}
        Err(err) => {
            let RemovedTask { index, mut entry } = removed;
            entry.status = SyncStatus::Failed(err.to_string());
            entries.insert(index.min(entries.len()), entry);
        }
    }
}

/// Clear a failure notice
pub fn dismiss_error(entries: &mut [TaskEntry], id: &str) {
    if let Some(entry) = entries.iter_mut().find(|e| e.task.id == id) {
        if entry.error().is_some() {
            entry.status = SyncStatus::Synced;
        }
    }
}

// ========================
// Store Helper Functions
// ========================

pub fn store_replace_tasks(store: &AppStore, tasks: Vec<Task>) {
    replace_tasks(&mut store.tasks().write(), tasks);
}

pub fn store_append_task(store: &AppStore, task: Task) {
    append_task(&mut store.tasks().write(), task);
}

pub fn store_begin_toggle(store: &AppStore, id: &str) -> Option<bool> {
    begin_toggle(&mut store.tasks().write(), id)
}

pub fn store_settle_toggle(store: &AppStore, id: &str, requested: bool, result: Result<Task, CommandError>) {
    settle_toggle(&mut store.tasks().write(), id, requested, result);
}

pub fn store_begin_delete(store: &AppStore, id: &str) -> Option<RemovedTask> {
    begin_delete(&mut store.tasks().write(), id)
}

pub fn store_settle_delete(store: &AppStore, removed: RemovedTask, result: Result<(), CommandError>) {
    settle_delete(&mut store.tasks().write(), removed, result);
}

pub fn store_dismiss_error(store: &AppStore, id: &str) {
    dismiss_error(&mut store.tasks().write(), id);
}
