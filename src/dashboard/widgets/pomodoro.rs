use serde::{Deserialize, Serialize};

pub const DEFAULT_POMODORO_MINUTES: u32 = 25;

/// Longest session accepted, one day.
pub const MAX_POMODORO_MINUTES: u32 = 24 * 60;

fn default_duration() -> u32 {
    DEFAULT_POMODORO_MINUTES
}

fn default_time_remaining() -> u32 {
    DEFAULT_POMODORO_MINUTES * 60
}

/// Countdown state. `duration` is in minutes, `time_remaining` in seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PomodoroData {
    #[serde(default = "default_duration")]
    pub duration: u32,
    #[serde(default = "default_time_remaining")]
    pub time_remaining: u32,
    #[serde(default)]
    pub is_running: bool,
    #[serde(default)]
    pub is_paused: bool,
}

impl Default for PomodoroData {
    fn default() -> Self {
        Self::with_minutes(DEFAULT_POMODORO_MINUTES)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown is not running; nothing changed.
    Idle,
    Running,
    /// The countdown reached zero on this tick and stopped.
    Finished,
}

impl PomodoroData {
    pub fn with_minutes(minutes: u32) -> Self {
        let minutes = minutes.clamp(1, MAX_POMODORO_MINUTES);
        Self {
            duration: minutes,
            time_remaining: minutes * 60,
            is_running: false,
            is_paused: false,
        }
    }

    pub fn total_seconds(&self) -> u32 {
        self.duration.clamp(1, MAX_POMODORO_MINUTES) * 60
    }

    /// Pull stored values back into range. Returns `true` when anything
    /// changed.
    pub fn clamp_to_limits(&mut self) -> bool {
        let before = (self.duration, self.time_remaining);
        self.duration = self.duration.clamp(1, MAX_POMODORO_MINUTES);
        self.time_remaining = self.time_remaining.min(self.total_seconds());
        before != (self.duration, self.time_remaining)
    }

    /// Counting down right now.
    pub fn is_active(&self) -> bool {
        self.is_running && !self.is_paused
    }

    pub fn start(&mut self) {
        if self.time_remaining == 0 {
            self.time_remaining = self.total_seconds();
        }
        self.is_running = true;
        self.is_paused = false;
    }

    pub fn pause(&mut self) {
        if self.is_running {
            self.is_paused = true;
        }
    }

    pub fn reset(&mut self) {
        self.is_running = false;
        self.is_paused = false;
        self.time_remaining = self.total_seconds();
    }

    /// Change the session length. The remaining time only follows while the
    /// timer is stopped.
    pub fn set_duration(&mut self, minutes: u32) {
        self.duration = minutes.clamp(1, MAX_POMODORO_MINUTES);
        if !self.is_running {
            self.time_remaining = self.total_seconds();
        }
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_active() {
            return TickOutcome::Idle;
        }
        if self.time_remaining <= 1 {
            self.time_remaining = 0;
            self.is_running = false;
            self.is_paused = false;
            return TickOutcome::Finished;
        }
        self.time_remaining -= 1;
        TickOutcome::Running
    }

    /// Elapsed share of the session in percent.
    pub fn progress(&self) -> f64 {
        let total = self.total_seconds() as f64;
        let remaining = self.time_remaining.min(self.total_seconds()) as f64;
        (total - remaining) / total * 100.0
    }

    /// `m:ss` rendering of the remaining time.
    pub fn format_time(&self) -> String {
        format!("{}:{:02}", self.time_remaining / 60, self.time_remaining % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_twenty_five_minutes() {
        let p = PomodoroData::default();
        assert_eq!(p.time_remaining, 1500);
        assert_eq!(p.format_time(), "25:00");
        assert_eq!(p.progress(), 0.0);
    }

    #[test]
    fn ticks_only_while_active() {
        let mut p = PomodoroData::with_minutes(1);
        assert_eq!(p.tick(), TickOutcome::Idle);
        p.start();
        assert_eq!(p.tick(), TickOutcome::Running);
        assert_eq!(p.format_time(), "0:59");
        p.pause();
        assert_eq!(p.tick(), TickOutcome::Idle);
        assert_eq!(p.time_remaining, 59);
    }

    #[test]
    fn finishes_at_zero_and_restarts_full() {
        let mut p = PomodoroData::with_minutes(1);
        p.start();
        p.time_remaining = 1;
        assert_eq!(p.tick(), TickOutcome::Finished);
        assert_eq!(p.time_remaining, 0);
        assert!(!p.is_running);
        assert_eq!(p.progress(), 100.0);
        p.start();
        assert_eq!(p.time_remaining, 60);
    }

    #[test]
    fn duration_change_respects_running_state() {
        let mut p = PomodoroData::default();
        p.set_duration(50);
        assert_eq!(p.time_remaining, 3000);
        p.start();
        p.tick();
        p.set_duration(10);
        assert_eq!(p.duration, 10);
        assert_eq!(p.time_remaining, 2999);
        p.reset();
        assert_eq!(p.time_remaining, 600);
    }

    #[test]
    fn huge_durations_are_capped() {
        let mut p = PomodoroData {
            duration: u32::MAX,
            time_remaining: u32::MAX,
            is_running: false,
            is_paused: false,
        };
        assert_eq!(p.total_seconds(), MAX_POMODORO_MINUTES * 60);
        p.reset();
        assert_eq!(p.time_remaining, MAX_POMODORO_MINUTES * 60);
        p.set_duration(100_000_000);
        assert_eq!(p.duration, MAX_POMODORO_MINUTES);
        assert_eq!(PomodoroData::with_minutes(u32::MAX).duration, MAX_POMODORO_MINUTES);

        let mut stored = PomodoroData {
            duration: 100_000_000,
            time_remaining: u32::MAX,
            ..PomodoroData::default()
        };
        assert!(stored.clamp_to_limits());
        assert_eq!(stored.time_remaining, MAX_POMODORO_MINUTES * 60);
        assert!(!stored.clamp_to_limits());
    }
}
