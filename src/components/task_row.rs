//! Task Row Component
//!
//! Checkbox, title and delete button for one task. Mutations are applied
//! locally first and reconciled when the server answers.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::TaskEntry;
use crate::store::{
    store_begin_delete, store_begin_toggle, store_dismiss_error, store_settle_delete,
    store_settle_toggle, use_app_store,
};

#[component]
pub fn TaskRow(entry: TaskEntry) -> impl IntoView {
    let store = use_app_store();

    let id = entry.task.id.clone();
    let completed = entry.task.completed;
    let pending = entry.is_pending();
    let error = entry.error().map(str::to_string);

    let toggle_id = id.clone();
    let on_toggle = move |_| {
        let id = toggle_id.clone();
        let Some(requested) = store_begin_toggle(&store, &id) else { return };
        spawn_local(async move {
            let result = commands::set_task_completed(&id, requested).await;
            if let Err(e) = &result {
                web_sys::console::log_1(&format!("[TASKS] Toggle {} failed: {}", id, e).into());
            }
            store_settle_toggle(&store, &id, requested, result);
        });
    };

    let delete_id = id.clone();
    let on_delete = move |_| {
        let id = delete_id.clone();
        let Some(removed) = store_begin_delete(&store, &id) else { return };
        spawn_local(async move {
            let result = commands::delete_task(&id).await;
            if let Err(e) = &result {
                web_sys::console::log_1(&format!("[TASKS] Delete {} failed: {}", id, e).into());
            }
            store_settle_delete(&store, removed, result);
        });
    };

    let row_class = match (pending, error.is_some()) {
        (true, _) => "task-row pending",
        (false, true) => "task-row failed",
        _ => "task-row",
    };

    view! {
        <li class=row_class>
            <input
                type="checkbox"
                prop:checked=completed
                disabled=pending
                on:change=on_toggle
            />
            <span class=if completed { "task-title completed" } else { "task-title" }>
                {entry.task.title.clone()}
            </span>
            <button class="delete-btn" disabled=pending on:click=on_delete>"×"</button>
            {error.map(|msg| {
                let dismiss_id = id.clone();
                view! {
                    <span class="task-error">
                        {msg}
                        <button
                            class="dismiss-btn"
                            on:click=move |_| store_dismiss_error(&store, &dismiss_id)
                        >
                            "dismiss"
                        </button>
                    </span>
                }
            })}
        </li>
    }
}
