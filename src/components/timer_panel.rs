//! Timer Panel Component
//!
//! Countdown display plus Start/Pause. Owns the tick source: the interval
//! exists only while the timer is running and is torn down on unmount.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::ticker::Ticker;
use crate::timer::TickOutcome;

#[component]
pub fn TimerPanel() -> impl IntoView {
    let store = use_app_store();
    let ticker = StoredValue::new_local(Ticker::new());

    // Only changes on start/stop, not on every tick
    let running = Memo::new(move |_| store.timer().read().is_running());
    let expired = move || store.timer().read().seconds_left() == 0;

    Effect::new(move |_| {
        if running.get() {
            ticker.update_value(|t| {
                if !t.is_active() {
                    t.start(move || {
                        if store.timer().write().tick() == TickOutcome::Expired {
                            web_sys::console::log_1(&"[TIMER] Session finished".into());
                        }
                    });
                }
            });
        } else {
            ticker.update_value(|t| t.stop());
        }
    });

    on_cleanup(move || ticker.update_value(|t| t.stop()));

    view! {
        <div class="timer-panel">
            <div class="timer-display">{move || store.timer().read().display()}</div>
            <button
                class="start-btn"
                disabled=move || !running.get() && expired()
                on:click=move |_| {
                    store.timer().write().toggle_run();
                }
            >
                {move || if running.get() { "Pause" } else { "Start" }}
            </button>
        </div>
    }
}
