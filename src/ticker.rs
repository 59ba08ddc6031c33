//! Owned Tick Source
//!
//! Wraps a `gloo-timers` interval. At most one interval is live per
//! `Ticker`; stopping, restarting or dropping cancels the previous one.

use gloo_timers::callback::Interval;

pub const TICK_MILLIS: u32 = 1_000;

#[derive(Default)]
pub struct Ticker {
    handle: Option<Interval>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start ticking, replacing any interval already running
    pub fn start(&mut self, on_tick: impl FnMut() + 'static) {
        self.stop();
        self.handle = Some(Interval::new(TICK_MILLIS, on_tick));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.cancel();
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
