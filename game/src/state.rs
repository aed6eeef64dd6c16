use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::range::RangeCore;
use crate::round_timer::RoundTimer;
use crate::target::Target;
use crate::view::{GameView, GameViewEvent};

/// Outcome of one countdown step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundTick {
    /// No round is running; nothing advanced.
    Idle,
    Counting { remaining_secs: u64 },
    Finished { score: u32 },
}

/// Whole game state: which screen is up, the range board, and the round
/// clock. The chosen duration lives in the timer's limit; a zero limit
/// means no duration has been picked yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub view: GameView,
    pub range: RangeCore,
    pub round_timer: RoundTimer,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            view: GameView::default(),
            range: RangeCore::new(seed),
            round_timer: RoundTimer::new(Duration::ZERO),
        }
    }

    /// Pick the round length. Zero comes from bogus input and is silently
    /// ignored, leaving any earlier choice in place.
    pub fn select_duration(&mut self, seconds: u64) {
        if seconds == 0 {
            return;
        }
        self.round_timer = RoundTimer::new(Duration::from_secs(seconds));
    }

    pub fn chosen_duration(&self) -> Option<Duration> {
        let limit = self.round_timer.limit();
        if limit.is_zero() { None } else { Some(limit) }
    }

    /// Start (or restart) a round: full clock, zero score, one fresh
    /// target. No-op until a duration has been chosen.
    pub fn start(&mut self) -> bool {
        if self.chosen_duration().is_none() {
            return false;
        }
        self.round_timer.reset();
        self.range.begin_round();
        self.view = GameView::Round;
        true
    }

    pub fn is_running(&self) -> bool {
        self.view.is_round()
    }

    /// Advance the countdown by one second. Reports `Finished` exactly once
    /// per round, on the tick that exhausts the clock.
    pub fn tick(&mut self) -> RoundTick {
        if !self.is_running() {
            return RoundTick::Idle;
        }
        self.round_timer.tick();
        if self.round_timer.is_expired() {
            return self.finish();
        }
        RoundTick::Counting {
            remaining_secs: self.round_timer.remaining_secs(),
        }
    }

    /// Stop the round and route to name entry (points on the board) or
    /// straight to the score table (scoreless). Idempotent once finished.
    pub fn finish(&mut self) -> RoundTick {
        if !self.is_running() {
            return RoundTick::Idle;
        }
        let score = self.range.score();
        self.range.end_round();
        let (view, _) = self.view.handle(GameViewEvent::RoundFinished { score });
        self.view = view;
        RoundTick::Finished { score }
    }

    /// Count a hit on the live target. Outside a running round this leaves
    /// the score untouched.
    pub fn register_hit(&mut self) -> u32 {
        if !self.is_running() {
            return self.range.score();
        }
        self.range.register_hit()
    }

    pub fn score(&self) -> u32 {
        self.range.score()
    }

    pub fn target(&self) -> Option<Target> {
        self.range.target()
    }

    pub fn clock_label(&self) -> String {
        self.round_timer.clock_label()
    }
}
