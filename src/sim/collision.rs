//! Collision detection for grid-aligned rectangles
//!
//! Everything on the playfield is an axis-aligned box, so overlap is a
//! strict interval test on both axes (touching edges don't count).

use glam::Vec2;

use super::state::Vehicle;

/// Axis-aligned rectangle in pixel space (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Strict overlap test
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }
}

/// Index of the first vehicle in `row` overlapping `target`, in iteration order
pub fn first_hit(target: &Rect, row: i32, vehicles: &[Vehicle]) -> Option<usize> {
    vehicles
        .iter()
        .position(|v| v.row == row && target.intersects(&v.rect()))
}
