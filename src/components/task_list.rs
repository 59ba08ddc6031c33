//! Task List Component

use leptos::prelude::*;

use super::TaskRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show
            when=move || !store.tasks().read().is_empty()
            fallback=|| view! { <p class="empty-list">"No tasks yet."</p> }
        >
            <ul class="task-list">
                // Keyed by the whole entry so status and completion changes re-render the row
                <For
                    each=move || store.tasks().get()
                    key=|entry| entry.clone()
                    children=move |entry| view! { <TaskRow entry=entry /> }
                />
            </ul>
        </Show>
    }
}
