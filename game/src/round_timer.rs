use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Second-granular countdown for time-boxed rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTimer {
    #[serde(with = "crate::serde_secs")]
    remaining: Duration,
    #[serde(with = "crate::serde_secs")]
    limit: Duration,
}

impl RoundTimer {
    pub fn new(limit: Duration) -> Self {
        Self {
            remaining: limit,
            limit,
        }
    }

    pub fn reset(&mut self) {
        self.remaining = self.limit;
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining.as_secs()
    }

    pub fn is_expired(&self) -> bool {
        self.remaining.is_zero()
    }

    /// One countdown step. Never underflows past zero.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(Duration::from_secs(1));
    }

    /// Remaining time as the UI clock shows it, seconds zero-padded to two
    /// digits.
    pub fn clock_label(&self) -> String {
        format!("00:{:02}", self.remaining_secs())
    }
}
