//! Axis-aligned rectangle geometry and small scalar helpers

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Clamp `value` into `[min, max]`
///
/// Unlike `f32::clamp` this never panics; an inverted range yields `max`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// An axis-aligned rectangle, anchored at its top-left corner (y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Closest point on or inside the rectangle to `p`
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        let max = self.max();
        Vec2::new(
            clamp(p.x, self.pos.x, max.x),
            clamp(p.y, self.pos.y, max.y),
        )
    }

    /// Whether `p` lies inside (edges inclusive)
    pub fn contains(&self, p: Vec2) -> bool {
        self.nearest_point(p) == p
    }
}
