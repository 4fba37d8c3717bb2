//! Platform generation, camera scroll, bounce, and recycling
//!
//! The platform manager owns the per-tick pass over the live platform set:
//! scroll while the doodler climbs, bounce on overlap, prune what fell off the
//! bottom, then top the set back up to the minimum count.

use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::overlaps;
use super::state::{GameState, Platform};
use crate::consts::*;

/// Random platform x, uniform over the left three-quarters of the field
fn random_x(rng: &mut Pcg32) -> f32 {
    rng.random_range(0.0..PLATFORM_X_RANGE)
}

/// The initial 7-platform field: a fixed starter under the spawn point, then
/// six random columns stacked upward by a fixed step from near the bottom.
pub fn generate_initial_field(rng: &mut Pcg32) -> Vec<Platform> {
    let mut platforms = Vec::with_capacity(MIN_PLATFORMS);
    platforms.push(Platform::new(STARTER_PLATFORM_X, STARTER_PLATFORM_Y));
    for i in 0..(MIN_PLATFORMS - 1) {
        let y = FIELD_HEIGHT - PLATFORM_STACK_STEP * i as f32 - 150.0;
        platforms.push(Platform::new(random_x(rng), y));
    }
    platforms
}

/// One replacement platform, spawned one platform-height above the visible
/// top edge so the scroll carries it into view.
pub fn generate_replacement(rng: &mut Pcg32) -> Platform {
    Platform::new(random_x(rng), -PLATFORM_HEIGHT)
}

/// Per-tick platform manager pass.
///
/// The scroll condition is re-checked for every platform because a bounce
/// mid-pass flips the doodler out of its descent, which changes what the
/// remaining platforms see.
pub fn step(state: &mut GameState) {
    let doodler_box = state.doodler.aabb();
    for platform in &mut state.platforms {
        // Camera scroll: doodler climbing while high on screen pushes the
        // world down at a fixed speed instead of moving the doodler up
        if state.doodler.vel.y < 0.0 && state.doodler.pos.y < SCROLL_BAND {
            platform.pos.y -= LAUNCH_VELOCITY;
        }
        // Bounce only while descending or stationary; an ascending doodler
        // passes through platforms from below
        if state.doodler.vel.y >= 0.0 && overlaps(&doodler_box, &platform.aabb()) {
            state.doodler.vel.y = LAUNCH_VELOCITY;
        }
    }

    // Prune what scrolled off the bottom, then replenish; replenishment must
    // see the post-pruning count
    state.platforms.retain(|p| p.pos.y < FIELD_HEIGHT);
    while state.platforms.len() < MIN_PLATFORMS {
        let replacement = generate_replacement(&mut state.rng);
        state.platforms.push(replacement);
    }
}
