//! Game state and core simulation types
//!
//! Everything the tick function reads and writes lives here, so a test can
//! build a state, advance it, and assert on the result without a display.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::platforms;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// The doodler fell past the bottom edge; waiting for a restart input
    GameOver,
}

/// Which way the doodler faces (selects the sprite, irrelevant to physics)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

/// The player character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Doodler {
    /// Top-left corner in field coordinates
    pub pos: Vec2,
    /// Pixels per tick; y is continuously pulled down by gravity, x is set
    /// only by input and persists until reversed
    pub vel: Vec2,
    pub facing: Facing,
}

impl Doodler {
    /// Doodler at the spawn point with the starting launch velocity
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new(DOODLER_START_X, DOODLER_START_Y),
            vel: Vec2::new(0.0, LAUNCH_VELOCITY),
            facing: Facing::Right,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, DOODLER_WIDTH, DOODLER_HEIGHT)
    }
}

/// A platform. Identity is purely positional; all platforms share one size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    /// Top-left corner in field coordinates
    pub pos: Vec2,
}

impl Platform {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, PLATFORM_WIDTH, PLATFORM_HEIGHT)
    }
}

/// Score state: a signed accumulator and the ratcheted value shown on the HUD
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Signed accumulator; may go negative while falling with no visible effect
    pub running: i64,
    /// Max-so-far of `running`; never decreases within a run
    pub display: i64,
}

/// Complete game state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed this run's RNG was built from
    pub seed: u64,
    /// RNG for platform placement and score increments
    pub rng: Pcg32,
    pub doodler: Doodler,
    /// Live platforms, in stable order: pruned and appended every tick,
    /// each drawn exactly once per frame
    pub platforms: Vec<Platform>,
    pub score: Score,
    pub phase: GamePhase,
}

impl GameState {
    /// Create a start-of-run state with a freshly generated platform field
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let platforms = platforms::generate_initial_field(&mut rng);
        Self {
            seed,
            rng,
            doodler: Doodler::spawn(),
            platforms,
            score: Score::default(),
            phase: GamePhase::Running,
        }
    }

    /// Restart transition: identical to a fresh run with the given seed
    pub fn reset(&mut self, seed: u64) {
        *self = Self::new(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_shape() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.platforms.len(), MIN_PLATFORMS);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.doodler.vel, Vec2::new(0.0, LAUNCH_VELOCITY));
        assert_eq!(
            state.doodler.pos,
            Vec2::new(DOODLER_START_X, DOODLER_START_Y)
        );
        assert_eq!(state.doodler.facing, Facing::Right);
    }

    #[test]
    fn test_reset_matches_fresh_state() {
        let mut state = GameState::new(1);
        state.doodler.pos.y = 9999.0;
        state.phase = GamePhase::GameOver;
        state.score.display = 42;

        state.reset(2);
        let fresh = GameState::new(2);
        assert_eq!(state.doodler, fresh.doodler);
        assert_eq!(state.platforms, fresh.platforms);
        assert_eq!(state.score, fresh.score);
        assert_eq!(state.phase, GamePhase::Running);
    }
}
