use std::time::Duration;

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Round {
    One,
    Two,
    Three,
}

impl Round {
    pub fn number(self) -> u8 {
        match self {
            Round::One => 1,
            Round::Two => 2,
            Round::Three => 3,
        }
    }

    /// How long the round lasts before the next one starts. Round three never ends.
    pub fn duration(self) -> Option<Duration> {
        match self {
            Round::One => Some(ROUND1_DURATION),
            Round::Two => Some(ROUND2_DURATION),
            Round::Three => None,
        }
    }

    pub fn next(self) -> Option<Round> {
        match self {
            Round::One => Some(Round::Two),
            Round::Two => Some(Round::Three),
            Round::Three => None,
        }
    }

    pub fn spawn_interval(self) -> Duration {
        match self {
            Round::One => ROUND1_SPAWN_INTERVAL,
            Round::Two => ROUND2_SPAWN_INTERVAL,
            Round::Three => ROUND3_SPAWN_INTERVAL,
        }
    }

    pub fn spawn_count(self) -> usize {
        match self {
            Round::One => 1,
            Round::Two => 2,
            Round::Three => 3,
        }
    }
}

/// Difficulty knobs in effect for the current tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundParams {
    pub asteroid_speed: f64,
    pub spawn_interval: Duration,
    pub spawn_count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoundController {
    round: Round,
    round_started_at: Duration,
}

impl Default for RoundController {
    fn default() -> Self {
        RoundController {
            round: Round::One,
            round_started_at: Duration::ZERO,
        }
    }
}

impl RoundController {
    pub fn round(&self) -> Round {
        self.round
    }

    pub fn round_started_at(&self) -> Duration {
        self.round_started_at
    }

    /// Advances through every round boundary passed by `now`. A new round starts
    /// at the instant its predecessor expired. Returns the round entered, if any.
    pub fn update(&mut self, now: Duration) -> Option<Round> {
        let mut entered = None;
        while let (Some(duration), Some(next)) = (self.round.duration(), self.round.next()) {
            if now.saturating_sub(self.round_started_at) <= duration {
                break;
            }
            self.round_started_at += duration;
            self.round = next;
            entered = Some(next);
        }
        entered
    }

    pub fn params(&self, now: Duration) -> RoundParams {
        let asteroid_speed = match self.round {
            Round::One => BASE_ASTEROID_SPEED,
            Round::Two => BASE_ASTEROID_SPEED * ROUND2_SPEED_FACTOR,
            Round::Three => {
                let elapsed = now.saturating_sub(self.round_started_at);
                let increments = (elapsed.as_millis() / ROUND3_SPEED_STEP.as_millis()) as f64;
                BASE_ASTEROID_SPEED * ROUND3_SPEED_FACTOR + increments * ROUND3_SPEED_INCREMENT
            }
        };
        RoundParams {
            asteroid_speed,
            spawn_interval: self.round.spawn_interval(),
            spawn_count: self.round.spawn_count(),
        }
    }

    /// Time left on the round-title banner, which opens when the round starts.
    pub fn banner_remaining(&self, now: Duration) -> Option<Duration> {
        let shown_for = now.saturating_sub(self.round_started_at);
        ROUND_BANNER_DURATION
            .checked_sub(shown_for)
            .filter(|remaining| !remaining.is_zero())
    }
}
