//! New Task Form Component
//!
//! Text input that creates a task on submit (button or Enter).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{store_append_task, use_app_store};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();

    let (new_title, set_new_title) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get().trim().to_string();
        if title.is_empty() { return; }

        spawn_local(async move {
            match commands::create_task(&title).await {
                Ok(task) => {
                    store_append_task(&store, task);
                    set_new_title.set(String::new());
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::log_1(&format!("[TASKS] Create failed: {}", e).into());
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <div class="new-task-row">
                <input
                    type="text"
                    placeholder="Add a task..."
                    prop:value=move || new_title.get()
                    on:input=move |ev| set_new_title.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </div>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
        </form>
    }
}
