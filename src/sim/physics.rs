//! Doodler physics integration
//!
//! One integration step per tick: horizontal drift with toroidal wrap,
//! additive gravity with no terminal velocity, and the fall-off-the-bottom
//! terminal transition.

use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Advance the doodler by one tick.
///
/// Order matters and matches the render pass that follows: move horizontally,
/// wrap, accelerate, move vertically, then check the bottom edge. The bounce
/// is not applied here; the platform manager owns it.
pub fn integrate(state: &mut GameState) {
    let doodler = &mut state.doodler;

    doodler.pos.x += doodler.vel.x;
    // Toroidal horizontal wrap: walking off one side re-enters on the other.
    // Deliberate, not clamping.
    if doodler.pos.x > FIELD_WIDTH {
        doodler.pos.x = 0.0;
    } else if doodler.pos.x + DOODLER_WIDTH < 0.0 {
        doodler.pos.x = FIELD_WIDTH;
    }

    doodler.vel.y += GRAVITY;
    doodler.pos.y += doodler.vel.y;

    // Top edge past the bottom of the field ends the run
    if doodler.pos.y > FIELD_HEIGHT {
        state.phase = GamePhase::GameOver;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GameState;

    #[test]
    fn test_gravity_and_vertical_motion() {
        let mut state = GameState::new(1);
        state.doodler.pos.y = 458.0;
        state.doodler.vel.y = LAUNCH_VELOCITY;

        integrate(&mut state);
        assert!((state.doodler.vel.y - (LAUNCH_VELOCITY + GRAVITY)).abs() < 1e-5);
        assert!((state.doodler.pos.y - (458.0 + LAUNCH_VELOCITY + GRAVITY)).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_right_edge() {
        let mut state = GameState::new(1);
        state.doodler.pos.x = FIELD_WIDTH + 1.0;
        state.doodler.vel.x = 0.0;

        integrate(&mut state);
        assert_eq!(state.doodler.pos.x, 0.0);
    }

    #[test]
    fn test_wrap_left_edge() {
        let mut state = GameState::new(1);
        state.doodler.pos.x = -DOODLER_WIDTH - 1.0;
        state.doodler.vel.x = 0.0;

        integrate(&mut state);
        assert_eq!(state.doodler.pos.x, FIELD_WIDTH);
    }

    #[test]
    fn test_no_wrap_inside_field() {
        let mut state = GameState::new(1);
        state.doodler.pos.x = 100.0;
        state.doodler.vel.x = HORIZONTAL_SPEED;

        integrate(&mut state);
        assert_eq!(state.doodler.pos.x, 100.0 + HORIZONTAL_SPEED);
    }

    #[test]
    fn test_fall_past_bottom_ends_run() {
        let mut state = GameState::new(1);
        state.doodler.pos.y = FIELD_HEIGHT - 1.0;
        state.doodler.vel.y = 10.0;

        integrate(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_reaching_bottom_exactly_is_not_game_over() {
        let mut state = GameState::new(1);
        // -GRAVITY + GRAVITY cancels exactly, leaving y right on the edge
        state.doodler.vel.y = -GRAVITY;
        state.doodler.pos.y = FIELD_HEIGHT;

        integrate(&mut state);
        assert_eq!(state.doodler.pos.y, FIELD_HEIGHT);
        assert_eq!(state.phase, GamePhase::Running);
    }
}
