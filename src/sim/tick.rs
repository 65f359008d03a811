//! Per-tick state machine and physics
//!
//! [`tick`] is the only entry point a host calls: it applies at most one
//! discrete key event, reads the held movement keys, and runs the physics
//! pass when the session is Playing. The pass has a fixed order (integrate,
//! walls, paddle, bricks, floor) and that order is load-bearing: the paddle
//! de-penetration moves the ball before the brick tests see it.

use super::round::Round;
use super::state::{GameMode, GameSession, MenuOption};
use crate::consts::*;

/// Logical keys the simulation understands. The host maps real scancodes
/// to these; Left/Right movement arrives as held flags instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Confirm,
    Cancel,
}

/// A discrete key transition. At most one is observed per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

/// Input sampled by the host for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub event: Option<KeyEvent>,
    /// Continuous paddle movement keys, polled each tick.
    pub held_left: bool,
    pub held_right: bool,
}

/// Outcome of one physics pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PhysicsOutcome {
    Continue,
    BallLost,
}

/// Advance the session by one tick.
pub fn tick(session: &mut GameSession, input: &TickInput) {
    match session.mode {
        GameMode::Menu => tick_menu(session, input),
        GameMode::Playing => tick_playing(session, input),
        GameMode::Paused => tick_paused(session, input),
        GameMode::GameOver => tick_game_over(session, input),
        // Terminal; the host reads should_exit() and stops.
        GameMode::Exit => {}
    }
}

fn tick_menu(session: &mut GameSession, input: &TickInput) {
    match input.event {
        Some(KeyEvent::Pressed(Key::Up)) => {
            session.menu_cursor =
                (session.menu_cursor + MenuOption::COUNT - 1) % MenuOption::COUNT;
        }
        Some(KeyEvent::Pressed(Key::Down)) => {
            session.menu_cursor = (session.menu_cursor + 1) % MenuOption::COUNT;
        }
        // Level adjustment fires on key *release* and never moves the
        // highlight. The press that may have moved the cursor onto
        // SelectLevel was a separate, earlier tick.
        Some(KeyEvent::Released(Key::Up))
            if session.menu_option() == MenuOption::SelectLevel =>
        {
            if session.level > MIN_LEVEL {
                session.level -= 1;
            }
        }
        Some(KeyEvent::Released(Key::Down))
            if session.menu_option() == MenuOption::SelectLevel =>
        {
            if session.level < MAX_LEVEL {
                session.level += 1;
            }
        }
        Some(KeyEvent::Pressed(Key::Confirm)) => match session.menu_option() {
            MenuOption::Start => {
                session.start_round();
                session.mode = GameMode::Playing;
            }
            MenuOption::SelectLevel => {
                // Stays in the menu; renderers surface the level value.
                session.level_select_open = true;
            }
            MenuOption::Exit => session.mode = GameMode::Exit,
        },
        _ => {}
    }
}

fn tick_playing(session: &mut GameSession, input: &TickInput) {
    if let Some(KeyEvent::Pressed(Key::Cancel)) = input.event {
        session.mode = GameMode::Paused;
        session.input_cooldown = PAUSE_DEBOUNCE_TICKS;
        return;
    }

    steer_paddle(&mut session.round, input);

    if step_physics(&mut session.round) == PhysicsOutcome::BallLost {
        log::info!("ball lost: score={}, level={}", session.round.score, session.level);
        session.mode = GameMode::GameOver;
    }
}

fn tick_paused(session: &mut GameSession, input: &TickInput) {
    // Debounce the key press that triggered the pause.
    if session.input_cooldown > 0 {
        session.input_cooldown -= 1;
        return;
    }
    match input.event {
        Some(KeyEvent::Pressed(Key::Confirm)) => session.mode = GameMode::Playing,
        Some(KeyEvent::Pressed(Key::Cancel)) => session.mode = GameMode::Exit,
        _ => {}
    }
}

fn tick_game_over(session: &mut GameSession, input: &TickInput) {
    match input.event {
        Some(KeyEvent::Pressed(Key::Confirm)) => {
            session.mode = GameMode::Menu;
            session.level = MIN_LEVEL;
        }
        Some(KeyEvent::Pressed(Key::Cancel)) => session.mode = GameMode::Exit,
        _ => {}
    }
}

/// Set paddle velocity from the held keys, pre-clamped so the upcoming
/// integration cannot carry the paddle past either field edge.
fn steer_paddle(round: &mut Round, input: &TickInput) {
    let paddle = &mut round.paddle;
    paddle.vel.x = 0.0;
    if input.held_left {
        paddle.vel.x -= PADDLE_SPEED;
    }
    if input.held_right {
        paddle.vel.x += PADDLE_SPEED;
    }

    let max_x = FIELD_WIDTH - paddle.size.x;
    let next_x = (paddle.pos.x + paddle.vel.x).clamp(0.0, max_x);
    paddle.vel.x = next_x - paddle.pos.x;
}

/// One physics pass over the round, in fixed order.
fn step_physics(round: &mut Round) -> PhysicsOutcome {
    let Round {
        ball,
        paddle,
        bricks,
        score,
        ..
    } = round;

    // 1. Integrate
    ball.step();
    paddle.step();

    // 2. Walls reflect by sign flip only; the position is left where it is,
    //    so the ball can sit slightly off-field for one tick.
    if ball.pos.x <= 0.0 || ball.pos.x + ball.radius * 2.0 >= FIELD_WIDTH {
        ball.vel.x = -ball.vel.x;
    }
    if ball.pos.y <= 0.0 {
        ball.vel.y = -ball.vel.y;
    }

    // 3. Paddle: reflect and de-penetrate in one step. `overlap` is how far
    //    the ball's vertical midline sits below the paddle top.
    if ball.aabb().intersects(&paddle.aabb()) {
        ball.vel.y = -ball.vel.y;
        let overlap = ball.pos.y + ball.radius - paddle.pos.y;
        ball.pos.y -= 2.0 * overlap;
    }

    // 4. Bricks, in creation order. Each hit flips vel.y independently, so
    //    an even number of simultaneous hits leaves the direction unchanged.
    let ball_box = ball.aabb();
    for brick in bricks.iter_mut().filter(|b| !b.destroyed) {
        if ball_box.intersects(&brick.aabb()) {
            brick.destroyed = true;
            ball.vel.y = -ball.vel.y;
            *score += 1;
        }
    }

    // 5. Floor
    if ball.pos.y + ball.radius * 2.0 >= FIELD_HEIGHT {
        return PhysicsOutcome::BallLost;
    }
    PhysicsOutcome::Continue
}
