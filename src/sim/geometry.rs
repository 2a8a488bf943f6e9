//! Axis-aligned rectangle geometry
//!
//! Every hit box in the game is an axis-aligned rectangle anchored at its
//! top-left corner, in screen coordinates (y grows downward).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square box of side `size` anchored at `pos`
    #[inline]
    pub fn square(pos: Vec2, size: f32) -> Self {
        Self::new(pos.x, pos.y, size, size)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Wider than tall
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.width > self.height
    }

    /// Overlap test, see [`overlap`]
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        overlap(self, other)
    }

    /// True if `other` lies entirely within this rectangle (edges inclusive)
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Two rectangles overlap unless a strictly positive gap separates them on
/// either axis. Coincident edges count as overlapping.
#[inline]
pub fn overlap(a: &Rect, b: &Rect) -> bool {
    !(a.right() < b.x || a.x > b.right() || a.bottom() < b.y || a.y > b.bottom())
}
