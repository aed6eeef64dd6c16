use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameView {
    StartMenu,
    TimeSelect,
    Round,
    NameEntry { score: u32 },
    HighScores,
}

impl Default for GameView {
    fn default() -> Self {
        Self::StartMenu
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameViewEvent {
    Play,
    ViewScores,
    DurationChosen,
    RoundFinished { score: u32 },
    Restart,
    NameSubmitted,
    SkipSave,
    ClearScores,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameViewEffect {
    None,
    StartRound,
    SaveScore,
    ClearScores,
}

impl GameView {
    /// Pure transition function for the screen state machine.
    ///
    /// Side-effects (starting a round, touching the score store) are reported
    /// via `GameViewEffect` so callers stay deterministic + easy to test.
    pub fn handle(self, event: GameViewEvent) -> (GameView, GameViewEffect) {
        match (self, event) {
            (GameView::StartMenu, GameViewEvent::Play) => {
                (GameView::TimeSelect, GameViewEffect::None)
            }
            (GameView::StartMenu, GameViewEvent::ViewScores) => {
                (GameView::HighScores, GameViewEffect::None)
            }

            (GameView::TimeSelect, GameViewEvent::DurationChosen) => {
                (GameView::Round, GameViewEffect::StartRound)
            }
            (GameView::TimeSelect, GameViewEvent::Back) => {
                (GameView::StartMenu, GameViewEffect::None)
            }

            // A scoreless round has nothing to record; skip name entry.
            (GameView::Round, GameViewEvent::RoundFinished { score: 0 }) => {
                (GameView::HighScores, GameViewEffect::None)
            }
            (GameView::Round, GameViewEvent::RoundFinished { score }) => {
                (GameView::NameEntry { score }, GameViewEffect::None)
            }
            (GameView::Round, GameViewEvent::Restart) => {
                (GameView::Round, GameViewEffect::StartRound)
            }

            (GameView::NameEntry { .. }, GameViewEvent::NameSubmitted) => {
                (GameView::HighScores, GameViewEffect::SaveScore)
            }
            (GameView::NameEntry { .. }, GameViewEvent::SkipSave) => {
                (GameView::HighScores, GameViewEffect::None)
            }

            (GameView::HighScores, GameViewEvent::ClearScores) => {
                (GameView::HighScores, GameViewEffect::ClearScores)
            }
            (GameView::HighScores, GameViewEvent::Back) => {
                (GameView::StartMenu, GameViewEffect::None)
            }
            (GameView::HighScores, GameViewEvent::Play) => {
                (GameView::TimeSelect, GameViewEffect::None)
            }

            // Ignore irrelevant events in the current state.
            (view, _) => (view, GameViewEffect::None),
        }
    }

    pub fn is_round(self) -> bool {
        matches!(self, GameView::Round)
    }

    pub fn is_name_entry(self) -> bool {
        matches!(self, GameView::NameEntry { .. })
    }
}
