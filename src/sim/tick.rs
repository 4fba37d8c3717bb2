//! Per-frame simulation tick and input events
//!
//! The glue layer queues logical input events between animation frames and
//! drains them into `tick` once per frame. The tick owns the phase machine:
//! Running advances the world, GameOver freezes it until a restart event.

use super::physics;
use super::platforms;
use super::score;
use super::state::{Facing, GamePhase, GameState};
use crate::consts::HORIZONTAL_SPEED;

/// Logical input codes the simulation reacts to; everything else the host
/// delivers is ignored before it gets here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCode {
    MoveRight,
    MoveLeft,
    RestartIfOver,
}

impl InputCode {
    /// Map a DOM `KeyboardEvent.code` to a logical input
    pub fn from_key(code: &str) -> Option<Self> {
        match code {
            "ArrowRight" | "KeyD" => Some(Self::MoveRight),
            "ArrowLeft" | "KeyA" => Some(Self::MoveLeft),
            "Space" => Some(Self::RestartIfOver),
            _ => None,
        }
    }
}

/// A discrete input event delivered by the host environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub code: InputCode,
}

impl InputEvent {
    pub fn new(code: InputCode) -> Self {
        Self { code }
    }
}

/// Advance the game by one animation-frame tick.
///
/// Events are applied in arrival order first: movement sets the persistent
/// horizontal velocity and facing (there is no stop control), and restart is
/// honored only from GameOver - while Running it is a strict no-op. A tick
/// that fires the game-over transition stops simulating immediately; the
/// frozen state keeps being rendered by the caller.
pub fn tick(state: &mut GameState, events: &[InputEvent]) {
    let mut restarted = false;
    for event in events {
        match event.code {
            InputCode::MoveRight => {
                state.doodler.vel.x = HORIZONTAL_SPEED;
                state.doodler.facing = Facing::Right;
            }
            InputCode::MoveLeft => {
                state.doodler.vel.x = -HORIZONTAL_SPEED;
                state.doodler.facing = Facing::Left;
            }
            InputCode::RestartIfOver => {
                if state.phase == GamePhase::GameOver {
                    let seed = state.seed.wrapping_add(1);
                    state.reset(seed);
                    restarted = true;
                }
            }
        }
    }

    // A restart tick renders the untouched start-of-run state; simulation
    // resumes on the next tick
    if restarted {
        return;
    }

    if state.phase == GamePhase::GameOver {
        return;
    }

    physics::integrate(state);
    if state.phase == GamePhase::GameOver {
        return;
    }

    platforms::step(state);
    score::update(&mut state.score, state.doodler.vel.y, &mut state.rng);
}
