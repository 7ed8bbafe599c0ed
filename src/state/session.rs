use serde::{Deserialize, Serialize};

use crate::engine::config;

/// Which screen the session is on. Movement and collisions only run in
/// `Play`; each mode gates its own timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    New,
    Day,
    Play,
    Over,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::New => "New",
            Mode::Day => "Day",
            Mode::Play => "Play",
            Mode::Over => "Over",
        }
    }
}

/// Session-wide scoring and pacing state. Mutated only through the
/// collision/collection protocol and the mode machine: score and level
/// never decrease, the quota never shrinks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub mode: Mode,
    pub level: u32,
    pub coffee_quota: u32,
    pub score: u32,
    /// Ticks left on the "Day N" banner while mode is `Day`
    pub day_timer: i32,
    /// Ticks left to deliver a held coffee; signed so expiry is observable
    pub coffee_timer: i32,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            mode: Mode::New,
            level: 1,
            coffee_quota: config::START_QUOTA,
            score: 0,
            day_timer: config::DAY_BANNER_TICKS,
            coffee_timer: config::COFFEE_TIMER_TICKS,
        }
    }

    pub fn add_score(&mut self, value: u32) {
        self.score += value;
    }

    pub fn reset_day_timer(&mut self) {
        self.day_timer = config::DAY_BANNER_TICKS;
    }

    pub fn reset_coffee_timer(&mut self) {
        self.coffee_timer = config::COFFEE_TIMER_TICKS;
    }

    /// Quota met: the next day starts with one more coworker wanting
    /// coffee.
    pub fn level_up(&mut self) {
        self.level += 1;
        self.coffee_quota += 1;
        self.mode = Mode::Day;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_on_day_one() {
        let session = SessionState::new();
        assert_eq!(session.mode, Mode::New);
        assert_eq!(session.level, 1);
        assert_eq!(session.coffee_quota, config::START_QUOTA);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn level_up_bumps_level_and_quota_and_enters_day() {
        let mut session = SessionState::new();
        session.mode = Mode::Play;
        session.level_up();
        assert_eq!(session.level, 2);
        assert_eq!(session.coffee_quota, config::START_QUOTA + 1);
        assert_eq!(session.mode, Mode::Day);
    }
}
