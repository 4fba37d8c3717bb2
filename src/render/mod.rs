//! Draw-call generation
//!
//! The simulation never touches a drawing surface. `render` walks a
//! `GameState` and issues calls against the `Renderer` trait; the wasm build
//! plugs in the Canvas2D backend, tests plug in a recorder.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use crate::consts::*;
use crate::sim::{Facing, GamePhase, GameState};

/// Opaque sprite handles, resolved by the rendering backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    DoodlerLeft,
    DoodlerRight,
    Platform,
}

/// One-frame drawing surface
///
/// Backends may silently skip a sprite whose asset has not finished loading;
/// a transient blank frame is tolerated, never an error.
pub trait Renderer {
    fn clear(&mut self);
    fn draw_sprite(&mut self, sprite: SpriteId, x: f32, y: f32, w: f32, h: f32);
    fn draw_text(&mut self, text: &str, x: f32, y: f32);
}

/// Message shown while waiting for a restart input
pub const GAME_OVER_TEXT: &str = "Game Over: Press 'Space' to Restart";

/// Draw one frame from the current state.
///
/// Pure function of the state: the frozen GameOver frame re-renders
/// identically every tick, with the restart prompt overlaid.
pub fn render<R: Renderer>(state: &GameState, renderer: &mut R) {
    renderer.clear();

    let sprite = match state.doodler.facing {
        Facing::Left => SpriteId::DoodlerLeft,
        Facing::Right => SpriteId::DoodlerRight,
    };
    let d = &state.doodler;
    renderer.draw_sprite(sprite, d.pos.x, d.pos.y, DOODLER_WIDTH, DOODLER_HEIGHT);

    for platform in &state.platforms {
        renderer.draw_sprite(
            SpriteId::Platform,
            platform.pos.x,
            platform.pos.y,
            PLATFORM_WIDTH,
            PLATFORM_HEIGHT,
        );
    }

    renderer.draw_text(&state.score.display.to_string(), HUD_TEXT_X, HUD_TEXT_Y);

    if state.phase == GamePhase::GameOver {
        renderer.draw_text(GAME_OVER_TEXT, GAME_OVER_TEXT_X, GAME_OVER_TEXT_Y);
    }
}
