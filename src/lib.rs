//! Brickfall - a single-screen breakout/arkanoid game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state machine, physics, collisions)
//!
//! Rendering, asset loading, and window/input plumbing live outside this
//! crate. A front end drives the simulation one tick at a time through
//! [`sim::tick`] and reads back a [`sim::Snapshot`] to draw.

pub mod sim;

pub use sim::{GameMode, GameSession, Key, KeyEvent, TickInput};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 700.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ball defaults. Positions are top-left corners; velocities are in
    /// units per tick.
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_X: f32 = 200.0;
    pub const BALL_START_Y: f32 = 250.0;
    pub const BALL_START_VEL_X: f32 = 0.1;
    pub const BALL_START_VEL_Y: f32 = -0.1;
    /// Scalar gain applied to ball velocity each tick. Must stay > 0.
    pub const BALL_SPEED_MULTIPLIER: f32 = 1.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 150.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_Y: f32 = 550.0;
    pub const PADDLE_SPEED: f32 = 0.4;

    /// Brick grid. The grid gains one row and one column per level.
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BASE_BRICK_ROWS: u32 = 5;
    pub const BASE_BRICK_COLS: u32 = 10;

    /// Selectable level range
    pub const MIN_LEVEL: u32 = 1;
    pub const MAX_LEVEL: u32 = 2;

    /// Ticks during which Paused ignores discrete input, so the key press
    /// that triggered the pause is not observed a second time.
    pub const PAUSE_DEBOUNCE_TICKS: u32 = 12;
}
