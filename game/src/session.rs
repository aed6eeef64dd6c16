use chrono::Utc;

use crate::highscores::{HighScoreBook, ScoreEntry, ScoreRepository};
use crate::state::{GameState, RoundTick};
use crate::target::BoardBounds;
use crate::view::{GameView, GameViewEffect, GameViewEvent};

/// Inputs the presentation layer feeds into the game, one variant per UI
/// affordance (buttons, the duration list, board clicks, the name field).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    Play,
    ViewScores,
    ChooseDuration(u64),
    ClickBoard { x: u32, y: u32 },
    SubmitName(String),
    SkipSave,
    Restart,
    Back,
    ClearScores,
}

/// Headless driver: owns the game state and the score book, applies player
/// inputs and 1 Hz clock ticks, and keeps a render-ready copy of the table.
#[derive(Debug)]
pub struct GameSession<R: ScoreRepository> {
    state: GameState,
    scores: HighScoreBook<R>,
    table: Vec<ScoreEntry>,
}

impl<R: ScoreRepository> GameSession<R> {
    pub fn new(seed: u64, repo: R) -> Self {
        let scores = HighScoreBook::new(repo);
        let table = scores.load();
        Self {
            state: GameState::new(seed),
            scores,
            table,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The persisted table, descending by score, for rendering.
    pub fn scoreboard(&self) -> &[ScoreEntry] {
        &self.table
    }

    pub fn set_board_bounds(&mut self, bounds: BoardBounds) {
        self.state.range.set_bounds(bounds);
    }

    /// Advance the 1 Hz countdown.
    pub fn tick(&mut self) -> RoundTick {
        self.state.tick()
    }

    pub fn apply(&mut self, input: PlayerInput) {
        match input {
            PlayerInput::Play => {
                self.apply_view_event(GameViewEvent::Play);
            }
            PlayerInput::ViewScores => {
                self.apply_view_event(GameViewEvent::ViewScores);
                self.table = self.scores.load();
            }
            PlayerInput::ChooseDuration(seconds) => {
                self.state.select_duration(seconds);
                // A rejected (zero) duration leaves the selection screen up.
                if self.state.chosen_duration().is_some()
                    && self.apply_view_event(GameViewEvent::DurationChosen)
                        == GameViewEffect::StartRound
                {
                    self.state.start();
                }
            }
            PlayerInput::ClickBoard { x, y } => {
                if self.state.is_running() && self.state.range.hit_test(x, y) {
                    self.state.register_hit();
                }
            }
            PlayerInput::SubmitName(raw) => {
                let at_entry = self.state.view;
                if self.apply_view_event(GameViewEvent::NameSubmitted) == GameViewEffect::SaveScore
                {
                    if let GameView::NameEntry { score } = at_entry {
                        let entry = ScoreEntry::new(&raw, score, Utc::now().to_rfc3339());
                        self.table = self.scores.submit(entry);
                    }
                }
            }
            PlayerInput::SkipSave => {
                self.apply_view_event(GameViewEvent::SkipSave);
            }
            PlayerInput::Restart => {
                if self.apply_view_event(GameViewEvent::Restart) == GameViewEffect::StartRound {
                    self.state.start();
                }
            }
            PlayerInput::Back => {
                self.apply_view_event(GameViewEvent::Back);
            }
            PlayerInput::ClearScores => {
                if self.apply_view_event(GameViewEvent::ClearScores) == GameViewEffect::ClearScores
                {
                    self.scores.clear();
                    self.table = self.scores.load();
                }
            }
        }
    }

    fn apply_view_event(&mut self, event: GameViewEvent) -> GameViewEffect {
        let (view, effect) = self.state.view.handle(event);
        self.state.view = view;
        effect
    }
}
