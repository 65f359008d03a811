//! Round construction and per-round state
//!
//! A `Round` owns the ball, the paddle, and the brick grid for one
//! playthrough. `Round::build` is the level manager: the grid shape is a
//! pure function of the level index, so rebuilding at the same level yields
//! an identical layout (only the colors follow the seed).

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Ball, Brick, BrickColor, Paddle};
use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// Bricks destroyed this round. Never decreases.
    pub score: u32,
    /// Level the grid was built for.
    pub level: u32,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Creation order doubles as the collision iteration order.
    pub bricks: Vec<Brick>,
}

impl Round {
    /// Build a fresh round: zero score, a full (5 + level) x (10 + level)
    /// brick grid at fixed pitch with no gaps, ball and paddle at their
    /// start positions.
    pub fn build(level: u32, color_seed: u64) -> Self {
        let rows = BASE_BRICK_ROWS + level;
        let cols = BASE_BRICK_COLS + level;
        let mut rng = Pcg32::seed_from_u64(color_seed);

        let mut bricks = Vec::with_capacity((rows * cols) as usize);
        for row in 0..rows {
            for col in 0..cols {
                let pos = Vec2::new(col as f32 * BRICK_WIDTH, row as f32 * BRICK_HEIGHT);
                let color = BrickColor {
                    r: rng.random(),
                    g: rng.random(),
                    b: rng.random(),
                };
                bricks.push(Brick::new(
                    pos,
                    Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
                    color,
                ));
            }
        }

        log::info!("built round: level={level}, grid={rows}x{cols}");

        Self {
            score: 0,
            level,
            ball: Ball::new(
                BALL_RADIUS,
                Vec2::new(BALL_START_VEL_X, BALL_START_VEL_Y),
                BALL_SPEED_MULTIPLIER,
            ),
            paddle: Paddle::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            bricks,
        }
    }

    /// Bricks still standing.
    pub fn bricks_alive(&self) -> usize {
        self.bricks.iter().filter(|b| !b.destroyed).count()
    }
}
