//! Brickfall entry point
//!
//! Headless demo loop: drives a session with a simple paddle-tracking
//! autopilot and prints the final score. A real front end would poll a
//! window for input, map keys into `TickInput`, and draw the snapshot.

use brickfall::sim::{GameMode, GameSession, Key, KeyEvent, TickInput, tick};

/// Safety cap so a lucky autopilot cannot loop forever.
const MAX_DEMO_TICKS: u64 = 5_000_000;

fn main() {
    env_logger::init();

    let mut session = GameSession::new(0xB51C);

    // Leave the menu: confirm the highlighted Start option.
    tick(
        &mut session,
        &TickInput {
            event: Some(KeyEvent::Pressed(Key::Confirm)),
            ..Default::default()
        },
    );

    let mut ticks: u64 = 0;
    while session.mode() == GameMode::Playing && ticks < MAX_DEMO_TICKS {
        let input = autopilot(&session);
        tick(&mut session, &input);
        ticks += 1;
    }

    let snap = session.snapshot();
    let bricks_left = snap.bricks.iter().filter(|b| !b.destroyed).count();
    log::info!("demo finished after {ticks} ticks");
    println!(
        "score: {} (level {}, bricks left {})",
        snap.score, snap.level, bricks_left
    );

    if std::env::args().any(|a| a == "--dump-state") {
        match serde_json::to_string_pretty(&session) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("state dump failed: {e}"),
        }
    }
}

/// Hold left/right toward the ball's horizontal center.
fn autopilot(session: &GameSession) -> TickInput {
    let snap = session.snapshot();
    let ball_center = snap.ball.pos.x + snap.ball.radius;
    let paddle_center = snap.paddle.pos.x + snap.paddle.size.x / 2.0;
    TickInput {
        event: None,
        held_left: ball_center < paddle_center - 1.0,
        held_right: ball_center > paddle_center + 1.0,
    }
}
