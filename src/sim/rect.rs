//! Axis-aligned rectangle geometry
//!
//! Every entity in the simulation is an [`Aabb`] in world pixels, origin
//! top-left, Y increasing downward. Width and height stay positive and
//! constant for an entity's lifetime.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::TILE_SIZE;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    /// Extent; both components positive
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Build from grid cells; level data is authored on the tile grid
    pub fn from_tiles(col: u32, row: u32, cols: u32, rows: u32) -> Self {
        Self::new(
            col as f32 * TILE_SIZE,
            row as f32 * TILE_SIZE,
            cols as f32 * TILE_SIZE,
            rows as f32 * TILE_SIZE,
        )
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

    /// Strict AABB overlap test; rectangles that merely touch do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
