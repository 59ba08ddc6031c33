//! UI Components
//!
//! Reusable Leptos components.

mod mode_selector;
mod timer_panel;
mod new_task_form;
mod task_list;
mod task_row;

pub use mode_selector::ModeSelector;
pub use timer_panel::TimerPanel;
pub use new_task_form::NewTaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
