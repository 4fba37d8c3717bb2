//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per animation frame, per-tick units
//! - Seeded RNG only (the glue layer picks a fresh wall-clock seed per run)
//! - Stable platform iteration order
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod platforms;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{Aabb, overlaps};
pub use state::{Doodler, Facing, GamePhase, GameState, Platform, Score};
pub use tick::{InputCode, InputEvent, tick};
