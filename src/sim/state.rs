//! Game session and mode state
//!
//! `GameSession` is the single aggregate a host owns: current mode, menu
//! cursor, level selection, and the active round. All of it mutates only
//! through [`super::tick::tick`]; renderers read it back via [`Snapshot`].

use serde::{Deserialize, Serialize};

use super::entity::{Ball, Brick, Paddle};
use super::round::Round;
use crate::consts::*;

/// Current mode of the game. `Menu` is initial; `Exit` is terminal and is
/// consumed by the host to stop its loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    Menu,
    Playing,
    Paused,
    GameOver,
    Exit,
}

/// Menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuOption {
    Start,
    SelectLevel,
    Exit,
}

impl MenuOption {
    pub const COUNT: usize = 3;

    pub fn from_index(index: usize) -> Self {
        match index % Self::COUNT {
            0 => MenuOption::Start,
            1 => MenuOption::SelectLevel,
            _ => MenuOption::Exit,
        }
    }
}

/// Complete game session (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) mode: GameMode,
    /// Highlighted menu entry, index into the `MenuOption` display order.
    pub(crate) menu_cursor: usize,
    /// Raised when SelectLevel is confirmed; renderers show the level value.
    pub(crate) level_select_open: bool,
    /// Level used for the next round. Persists across restarts until a
    /// game-over confirm returns to the menu.
    pub(crate) level: u32,
    /// Discrete input is ignored in Paused while this is nonzero.
    pub(crate) input_cooldown: u32,
    /// Seed for cosmetic brick colors, bumped per round.
    pub(crate) color_seed: u64,
    pub(crate) round: Round,
}

impl GameSession {
    /// Create a session sitting in the menu, with a round already built so
    /// snapshots are total.
    pub fn new(color_seed: u64) -> Self {
        Self {
            mode: GameMode::Menu,
            menu_cursor: 0,
            level_select_open: false,
            level: MIN_LEVEL,
            input_cooldown: 0,
            color_seed,
            round: Round::build(MIN_LEVEL, color_seed),
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.round.score
    }

    /// Highlighted menu entry.
    pub fn menu_option(&self) -> MenuOption {
        MenuOption::from_index(self.menu_cursor)
    }

    /// True once the session reached `Exit`; the host stops its loop.
    pub fn should_exit(&self) -> bool {
        self.mode == GameMode::Exit
    }

    /// Read-only view of everything a renderer needs for one frame.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            mode: self.mode,
            menu_option: self.menu_option(),
            level_select_open: self.level_select_open,
            score: self.round.score,
            level: self.level,
            ball: &self.round.ball,
            paddle: &self.round.paddle,
            bricks: &self.round.bricks,
        }
    }

    /// Replace the round with a freshly built one for the current level.
    pub(crate) fn start_round(&mut self) {
        self.color_seed = self.color_seed.wrapping_add(1);
        self.round = Round::build(self.level, self.color_seed);
    }
}

/// Read-only snapshot of the session, borrowed for one frame of drawing.
#[derive(Debug)]
pub struct Snapshot<'a> {
    pub mode: GameMode,
    pub menu_option: MenuOption,
    pub level_select_open: bool,
    pub score: u32,
    pub level: u32,
    pub ball: &'a Ball,
    pub paddle: &'a Paddle,
    pub bricks: &'a [Brick],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_in_menu() {
        let session = GameSession::new(0);
        assert_eq!(session.mode(), GameMode::Menu);
        assert_eq!(session.menu_option(), MenuOption::Start);
        assert_eq!(session.level(), MIN_LEVEL);
        assert!(!session.should_exit());
    }

    #[test]
    fn test_menu_option_from_index_wraps() {
        assert_eq!(MenuOption::from_index(0), MenuOption::Start);
        assert_eq!(MenuOption::from_index(1), MenuOption::SelectLevel);
        assert_eq!(MenuOption::from_index(2), MenuOption::Exit);
        assert_eq!(MenuOption::from_index(3), MenuOption::Start);
    }

    #[test]
    fn test_snapshot_mirrors_round() {
        let session = GameSession::new(9);
        let snap = session.snapshot();
        assert_eq!(snap.mode, GameMode::Menu);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.level, MIN_LEVEL);
        assert_eq!(snap.bricks.len(), 50);
        assert_eq!(snap.ball.pos, session.round.ball.pos);
    }

    #[test]
    fn test_start_round_rebuilds_for_current_level() {
        let mut session = GameSession::new(0);
        session.level = 2;
        session.round.score = 13;
        session.start_round();
        assert_eq!(session.round.score, 0);
        assert_eq!(session.round.bricks.len(), 84);
    }
}
