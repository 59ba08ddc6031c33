//! Mode Selector Component
//!
//! One button per timer mode; clicking resets the countdown to that mode.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::timer::TimerMode;

#[component]
pub fn ModeSelector() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="mode-selector">
            {TimerMode::ALL.into_iter().map(|mode| {
                let is_active = move || store.timer().read().mode() == mode;
                view! {
                    <button
                        class=move || if is_active() { "mode-btn active" } else { "mode-btn" }
                        on:click=move |_| store.timer().write().switch_mode(mode)
                    >
                        {mode.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
