//! Brick Bounce entry point
//!
//! The core is frontend-agnostic; this binary runs headless demo sessions
//! with a scripted autopilot so the full loop (input -> tick -> render) can
//! be exercised without a window. A graphical frontend would drive the same
//! loop from its own event source and vsync callback.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use brick_bounce::assets::{Preloader, SPRITES};
use brick_bounce::input::{Command, Key, key_down, key_up};
use brick_bounce::render::{DrawSurface, FrameSnapshot, Sprite};
use brick_bounce::settings::Settings;
use brick_bounce::sim::{GameState, Rect, apply_command, tick};

/// Sessions to play before exiting.
const DEMO_SESSIONS: u64 = 2;
/// Safety cap so a demo session always terminates (5 simulated minutes).
const MAX_SESSION_FRAMES: u64 = 60 * 300;

/// Frontend stand-in: counts draw calls instead of blitting pixels.
#[derive(Default)]
struct NullSurface {
    draws: u64,
}

impl DrawSurface for NullSurface {
    fn clear(&mut self) {}

    fn draw(&mut self, _sprite: Sprite, _rect: Rect) {
        self.draws += 1;
    }
}

fn main() {
    env_logger::init();

    let settings = Settings::load(Path::new("settings.json"));
    log::info!(
        "brick-bounce starting: {}x{} grid",
        settings.rows,
        settings.cols
    );

    // A real frontend reports each sprite load here; headless, the images
    // are ready immediately, but the simulation still waits for the barrier.
    let mut preloader = Preloader::new();
    for sprite in SPRITES {
        log::debug!("sprite ready: {sprite:?}");
        preloader.resource_loaded();
    }
    if !preloader.is_ready() {
        log::error!("resource barrier never opened");
        return;
    }

    let seed = settings.seed.unwrap_or_else(clock_seed);
    let mut state = GameState::new(&settings, seed);
    let mut surface = NullSurface::default();

    for session in 0..DEMO_SESSIONS {
        // The explicit run loop: input intent, update, then render, strictly
        // in that order. The running flag is the sole cancellation signal;
        // the hosting frontend owns real frame pacing, so the demo runs
        // unpaced.
        let mut frames = 0;
        while state.running() && frames < MAX_SESSION_FRAMES {
            for command in autopilot(&state) {
                apply_command(&mut state, command);
            }
            tick(&mut state);
            FrameSnapshot::capture(&state).draw(&mut surface);
            frames += 1;
        }

        match state.phase.end_message() {
            Some(message) => println!("{message}"),
            None => log::warn!("session frame cap reached"),
        }
        log::info!(
            "session {} over: score {}, {} frames, {} draw calls",
            session + 1,
            state.score,
            frames,
            surface.draws
        );

        // Session end is a hard reset: the old world is discarded wholesale.
        if session + 1 < DEMO_SESSIONS {
            state.reset(seed.wrapping_add(session + 1));
        }
    }
}

/// Seed from the wall clock when the settings pin none.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Minimal autopilot: a synthetic keyboard that fires immediately, then
/// chases the ball so the platform center tracks the ball's x position.
fn autopilot(state: &GameState) -> Vec<Command> {
    let mut commands = Vec::new();
    if state.platform.is_carrying() {
        commands.extend(key_down(Key::Space));
    }

    let ball_x = state.ball.rect.center_x();
    let platform_x = state.platform.rect.center_x();
    let deadzone = state.platform.rect.size.x / 4.0;

    if ball_x < platform_x - deadzone {
        commands.extend(key_down(Key::Left));
    } else if ball_x > platform_x + deadzone {
        commands.extend(key_down(Key::Right));
    } else {
        commands.push(key_up(Key::Left));
    }
    commands
}
