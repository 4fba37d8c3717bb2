//! Axis-aligned bounding-box overlap test
//!
//! The only geometry the game needs: everything on screen is an upright
//! rectangle in y-down field coordinates.

use glam::Vec2;

/// An axis-aligned box, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            width,
            height,
        }
    }
}

/// Strict interval overlap on both axes.
///
/// Edge-touching boxes do not overlap; a bounce requires actual penetration,
/// not contact. In particular a zero-area box never overlaps anything it merely
/// touches, including a coincident zero-area box.
#[inline]
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}
