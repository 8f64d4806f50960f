//! Axis-aligned bounding boxes
//!
//! Every entity in the playfield is positioned and collision-tested through
//! a `Rect`. The y axis grows downward, matching screen coordinates.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Move the rect so its left edge sits at `x`.
    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x;
    }

    /// Move the rect so its right edge sits at `x`.
    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x;
    }

    /// Move the rect so its top edge sits at `y`.
    pub fn set_top(&mut self, y: f32) {
        self.pos.y = y;
    }

    /// Move the rect so its bottom edge sits at `y`.
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    /// Strict overlap test: rects that merely share an edge do not collide,
    /// so a ball snapped flush against a surface won't re-trigger.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
