pub mod highscores;
pub mod range;
pub mod round_timer;
pub mod serde_secs;
pub mod session;
pub mod state;
pub mod target;
pub mod view;
