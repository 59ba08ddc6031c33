//! Pomodoro Timer State Machine
//!
//! Pure countdown logic. The one-second tick source lives in `ticker.rs`.

/// Timer mode with a fixed total duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimerMode {
    #[default]
    Work,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    pub const ALL: [TimerMode; 3] = [TimerMode::Work, TimerMode::ShortBreak, TimerMode::LongBreak];

    pub fn minutes(&self) -> u32 {
        match self {
            TimerMode::Work => 25,
            TimerMode::ShortBreak => 5,
            TimerMode::LongBreak => 15,
        }
    }

    pub fn total_seconds(&self) -> u32 {
        self.minutes() * 60
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            TimerMode::Work => "Focus",
            TimerMode::ShortBreak => "Short",
            TimerMode::LongBreak => "Long",
        }
    }
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer was not running
    Idle,
    /// One second elapsed, time remains
    Counting,
    /// Reached zero and stopped
    Expired,
}

/// Client-side countdown session; never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSession {
    mode: TimerMode,
    seconds_left: u32,
    is_running: bool,
}

impl Default for TimerSession {
    fn default() -> Self {
        Self::new(TimerMode::Work)
    }
}

impl TimerSession {
    pub fn new(mode: TimerMode) -> Self {
        Self {
            mode,
            seconds_left: mode.total_seconds(),
            is_running: false,
        }
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Move to `next`, reset to its full duration and stop.
    pub fn switch_mode(&mut self, next: TimerMode) {
        *self = Self::new(next);
    }

    /// Start or pause. Starting with no time left does nothing.
    /// Returns the new running state.
    pub fn toggle_run(&mut self) -> bool {
        if self.is_running {
            self.is_running = false;
        } else if self.seconds_left > 0 {
            self.is_running = true;
        }
        self.is_running
    }

    /// Advance one second of wall-clock time.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running {
            return TickOutcome::Idle;
        }
        if self.seconds_left <= 1 {
            self.seconds_left = 0;
            self.is_running = false;
            return TickOutcome::Expired;
        }
        self.seconds_left -= 1;
        TickOutcome::Counting
    }

    /// `MM:SS`, zero-padded
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.seconds_left / 60, self.seconds_left % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_work_mode() {
        let session = TimerSession::default();
        assert_eq!(session.mode(), TimerMode::Work);
        assert_eq!(session.seconds_left(), 1500);
        assert!(!session.is_running());
        assert_eq!(session.display(), "25:00");
    }

    #[test]
    fn test_mode_durations() {
        assert_eq!(TimerMode::Work.total_seconds(), 1500);
        assert_eq!(TimerMode::ShortBreak.total_seconds(), 300);
        assert_eq!(TimerMode::LongBreak.total_seconds(), 900);
    }

    #[test]
    fn test_tick_while_stopped_is_noop() {
        let mut session = TimerSession::default();
        assert_eq!(session.tick(), TickOutcome::Idle);
        assert_eq!(session.seconds_left(), 1500);
    }

    #[test]
    fn test_counts_down_to_zero_and_stops() {
        let mut session = TimerSession::default();
        assert!(session.toggle_run());

        for _ in 0..1499 {
            assert_eq!(session.tick(), TickOutcome::Counting);
        }
        assert_eq!(session.seconds_left(), 1);
        assert_eq!(session.tick(), TickOutcome::Expired);
        assert_eq!(session.seconds_left(), 0);
        assert!(!session.is_running());

        assert_eq!(session.tick(), TickOutcome::Idle);
        assert_eq!(session.seconds_left(), 0);
        assert_eq!(session.display(), "00:00");
    }

    #[test]
    fn test_pause_keeps_remaining_time() {
        let mut session = TimerSession::default();
        session.toggle_run();
        session.tick();
        session.tick();
        assert!(!session.toggle_run());
        session.tick();
        assert_eq!(session.seconds_left(), 1498);
        assert_eq!(session.display(), "24:58");
    }

    #[test]
    fn test_switch_mode_stops_and_resets() {
        let mut session = TimerSession::default();
        session.toggle_run();
        for _ in 0..42 {
            session.tick();
        }

        session.switch_mode(TimerMode::ShortBreak);
        assert_eq!(session.seconds_left(), 300);
        assert!(!session.is_running());

        session.toggle_run();
        session.tick();
        session.switch_mode(TimerMode::LongBreak);
        assert_eq!(session.seconds_left(), 900);
        assert!(!session.is_running());
        assert_eq!(session.display(), "15:00");
    }

    #[test]
    fn test_switch_to_same_mode_resets() {
        let mut session = TimerSession::default();
        session.toggle_run();
        session.tick();
        session.switch_mode(TimerMode::Work);
        assert_eq!(session.seconds_left(), 1500);
        assert!(!session.is_running());
    }

    #[test]
    fn test_start_at_zero_is_noop() {
        let mut session = TimerSession::new(TimerMode::ShortBreak);
        session.toggle_run();
        for _ in 0..300 {
            session.tick();
        }
        assert_eq!(session.seconds_left(), 0);

        assert!(!session.toggle_run());
        assert!(!session.is_running());
        assert_eq!(session.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = TimerMode::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["Focus", "Short", "Long"]);
    }
}
