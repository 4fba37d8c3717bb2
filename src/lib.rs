//! Doodle Hop - a vertical-jumper arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, platforms, collisions, scoring)
//! - `render`: Renderer trait, draw-call generation, Canvas2D backend (wasm)
//!
//! The simulation is pure and display-free: the browser glue in `main.rs` feeds
//! it queued input events once per animation frame and hands the resulting
//! state to `render`.

pub mod render;
pub mod sim;

/// Game configuration constants
///
/// All speeds and accelerations are in pixels per tick (one tick per animation
/// frame); the coordinate system is y-down with the origin at the top-left of
/// the field.
pub mod consts {
    /// Visible play area
    pub const FIELD_WIDTH: f32 = 360.0;
    pub const FIELD_HEIGHT: f32 = 576.0;

    /// Doodler bounding box
    pub const DOODLER_WIDTH: f32 = 46.0;
    pub const DOODLER_HEIGHT: f32 = 46.0;

    /// Platform bounding box (shared by every platform)
    pub const PLATFORM_WIDTH: f32 = 60.0;
    pub const PLATFORM_HEIGHT: f32 = 18.0;

    /// Downward acceleration applied every tick; there is no terminal velocity
    pub const GRAVITY: f32 = 0.4;
    /// Vertical velocity set on bounce (and at run start); negative is up.
    /// Its magnitude doubles as the camera scroll speed.
    pub const LAUNCH_VELOCITY: f32 = -8.0;
    /// Horizontal speed set by a movement input; persists until reversed
    pub const HORIZONTAL_SPEED: f32 = 4.0;

    /// The live platform set is replenished up to this count every tick
    pub const MIN_PLATFORMS: usize = 7;
    /// Random platform x is drawn uniformly from [0, this)
    pub const PLATFORM_X_RANGE: f32 = FIELD_WIDTH * 0.75;
    /// Vertical spacing between consecutive initial platforms
    pub const PLATFORM_STACK_STEP: f32 = 75.0;
    /// The camera scrolls only while the doodler is above this line
    pub const SCROLL_BAND: f32 = FIELD_HEIGHT * 3.0 / 4.0;

    /// Doodler spawn position (top-left corner)
    pub const DOODLER_START_X: f32 = FIELD_WIDTH / 2.0 - DOODLER_WIDTH / 2.0;
    pub const DOODLER_START_Y: f32 = FIELD_HEIGHT * 7.0 / 8.0 - DOODLER_HEIGHT;

    /// Fixed starter platform under the spawn point
    pub const STARTER_PLATFORM_X: f32 = FIELD_WIDTH / 2.0;
    pub const STARTER_PLATFORM_Y: f32 = FIELD_HEIGHT - 50.0;

    /// Per-tick score delta is drawn uniformly from [0, this)
    pub const SCORE_STEP_RANGE: i64 = 50;

    /// HUD text anchors
    pub const HUD_TEXT_X: f32 = 5.0;
    pub const HUD_TEXT_Y: f32 = 20.0;
    pub const GAME_OVER_TEXT_X: f32 = FIELD_WIDTH / 7.0;
    pub const GAME_OVER_TEXT_Y: f32 = FIELD_HEIGHT * 7.0 / 8.0;
}
