//! FocusPulse Frontend App
//!
//! Timer on top, task list below.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{ModeSelector, NewTaskForm, TaskList, TimerPanel};
use crate::store::{store_replace_tasks, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    // Load tasks once on mount; any failure leaves an empty list
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_tasks().await {
                Ok(tasks) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} tasks", tasks.len()).into());
                    store_replace_tasks(&store, tasks);
                }
                Err(e) => {
                    web_sys::console::log_1(&format!("[APP] Loading tasks failed: {}", e).into());
                    store_replace_tasks(&store, Vec::new());
                }
            }
        });
    });

    view! {
        <main class="app-layout">
            <header class="app-header">
                <h1>"FocusPulse"</h1>
                <p class="tagline">"Pomodoro timer & simple task list."</p>
            </header>

            <ModeSelector />
            <TimerPanel />

            <section class="tasks-section">
                <h2>"Tasks"</h2>
                <NewTaskForm />
                <TaskList />
            </section>
        </main>
    }
}
