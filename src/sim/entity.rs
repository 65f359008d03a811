//! Simulation entities
//!
//! Plain data holders: position, velocity, size, plus the two operations
//! they support (`step` and `reset`). Collision response lives in `tick`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// RGB brick color. Cosmetic only, never consulted by physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// The ball. `pos` is the top-left corner of its enclosing square; all
/// collision tests use that square.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Scalar gain applied to velocity each tick. Always > 0.
    pub speed_multiplier: f32,
}

impl Ball {
    pub fn new(radius: f32, vel: Vec2, speed_multiplier: f32) -> Self {
        Self {
            pos: Vec2::new(BALL_START_X, BALL_START_Y),
            vel,
            radius,
            speed_multiplier,
        }
    }

    /// Advance one tick of motion.
    pub fn step(&mut self) {
        self.pos += self.vel * self.speed_multiplier;
    }

    /// Reinitialize for a new round. Radius is preserved.
    pub fn reset(&mut self, vel: Vec2, speed_multiplier: f32) {
        self.pos = Vec2::new(BALL_START_X, BALL_START_Y);
        self.vel = vel;
        self.speed_multiplier = speed_multiplier;
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(self.radius * 2.0))
    }
}

/// The player's paddle. Velocity is rewritten from the held movement keys
/// every Playing tick; its y component stays 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Paddle {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new((FIELD_WIDTH - width) / 2.0, PADDLE_Y),
            size: Vec2::new(width, height),
            vel: Vec2::ZERO,
        }
    }

    /// Advance one tick of motion.
    pub fn step(&mut self) {
        self.pos += self.vel;
    }

    /// Recenter for a new round. Size is preserved.
    pub fn reset(&mut self) {
        self.pos = Vec2::new((FIELD_WIDTH - self.size.x) / 2.0, PADDLE_Y);
        self.vel = Vec2::ZERO;
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A brick. Position and size never change after creation; `destroyed`
/// flips false -> true exactly once, on the scoring hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: BrickColor,
    pub destroyed: bool,
}

impl Brick {
    pub fn new(pos: Vec2, size: Vec2, color: BrickColor) -> Self {
        Self {
            pos,
            size,
            color,
            destroyed: false,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}
