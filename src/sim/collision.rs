//! Axis-aligned collision tests
//!
//! Everything in the playfield collides as a rectangle. The ball uses its
//! enclosing square (side = 2 * radius) for every test, so corner contacts
//! register slightly early compared to a true circle test.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box, stored as top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Bottom-right corner.
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Rectangle overlap on both axes. Non-strict: touching edges count as
    /// intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max().x
            && other.min.x <= self.max().x
            && self.min.y <= other.max().y
            && other.min.y <= self.max().y
    }
}
