//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per host loop iteration
//! - Seeded RNG only (cosmetic brick colors)
//! - Stable iteration order (bricks in creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod round;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use entity::{Ball, Brick, BrickColor, Paddle};
pub use round::Round;
pub use state::{GameMode, GameSession, MenuOption, Snapshot};
pub use tick::{Key, KeyEvent, TickInput, tick};
