use serde::{Deserialize, Serialize};

use crate::target::{
    BoardBounds, MAX_TARGET_DIAMETER, MIN_TARGET_DIAMETER, TARGET_PALETTE, Target,
};

/// Core state of the shooting range: the single live target and the hit
/// count for the current round.
///
/// Target placement is driven by a seeded RNG carried in the state itself,
/// so a round replays identically for a given seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeCore {
    bounds: BoardBounds,
    target: Option<Target>,
    score: u32,
    rng: Rng,
}

impl RangeCore {
    pub fn new(seed: u64) -> Self {
        Self {
            bounds: BoardBounds::default(),
            target: None,
            score: 0,
            rng: Rng::new(seed),
        }
    }

    pub fn set_bounds(&mut self, bounds: BoardBounds) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> BoardBounds {
        self.bounds
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn target(&self) -> Option<Target> {
        self.target
    }

    /// Reset for a fresh round: zero score, one freshly placed target.
    pub fn begin_round(&mut self) {
        self.score = 0;
        self.target = Some(self.spawn_target());
    }

    /// Record a hit on the live target and place the next one. Without a
    /// live target this is a no-op.
    pub fn register_hit(&mut self) -> u32 {
        if self.target.is_none() {
            return self.score;
        }
        self.score = self.score.saturating_add(1);
        self.target = Some(self.spawn_target());
        self.score
    }

    /// Whether a click at (x, y) lands on the live target.
    pub fn hit_test(&self, x: u32, y: u32) -> bool {
        self.target.map(|t| t.contains(x, y)).unwrap_or(false)
    }

    /// Take the board back to its idle state between rounds.
    pub fn end_round(&mut self) {
        self.target = None;
    }

    fn spawn_target(&mut self) -> Target {
        let diameter = MIN_TARGET_DIAMETER
            + self.rng.next_u32() % (MAX_TARGET_DIAMETER - MIN_TARGET_DIAMETER + 1);
        // Clamp the placement range so the circle stays fully on the board;
        // degenerate (unmeasured) boards pin the target to the origin.
        let max_x = self.bounds.width.saturating_sub(diameter);
        let max_y = self.bounds.height.saturating_sub(diameter);
        let x = if max_x == 0 {
            0
        } else {
            self.rng.next_u32() % (max_x + 1)
        };
        let y = if max_y == 0 {
            0
        } else {
            self.rng.next_u32() % (max_y + 1)
        };
        let color_index = self.rng.next_u32() as usize % TARGET_PALETTE.len();
        Target {
            x,
            y,
            diameter,
            color_index,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        let seed = if seed == 0 {
            0x9E37_79B9_7F4A_7C15
        } else {
            seed
        };
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        (x.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 32) as u32
    }
}
