//! Per-frame update
//!
//! The six steps in [`tick`] run in a fixed order that is part of the
//! contract: collisions are resolved against predicted positions first,
//! motion is committed last, and the render boundary only ever sees
//! post-update state.

use super::collision::Edge;
use super::state::{GamePhase, GameState};
use crate::input::Command;

/// Apply one input command. Commands only set intent (platform dx, the fire
/// request); positions move exclusively inside [`tick`], so asynchronous
/// input can never race the frame update.
pub fn apply_command(state: &mut GameState, command: Command) {
    match command {
        Command::MoveStart(direction) => state.platform.start_move(direction),
        Command::MoveStop => state.platform.stop_move(),
        Command::Fire => state.fire(),
    }
}

/// Advance the session by one frame.
pub fn tick(state: &mut GameState) {
    if !state.running() {
        return;
    }

    // 1. Blocks: every active block the ball is about to enter breaks and
    //    flips the ball's vertical velocity.
    for idx in 0..state.blocks.len() {
        let block = &state.blocks[idx];
        if block.active && state.ball.collides(&block.rect) {
            state.ball.bounce_off_block(&mut state.blocks[idx]);
            state.add_score();
            log::debug!("block {idx} broken, score {}", state.score);
        }
    }

    // 2. Platform deflection.
    if state.ball.collides(&state.platform.rect) {
        state.ball.bounce_off_platform(&state.platform);
    }

    // 3. World walls; floor contact loses the session.
    if state.ball.resolve_world_bounds(state.bounds) == Some(Edge::Floor) {
        state.phase = GamePhase::Lost;
        log::info!("ball hit the floor at score {}", state.score);
    }

    // 4. Platform hard-stops at the side walls.
    state.platform.clamp_to_world(state.bounds.x);

    // 5. Commit ball motion.
    state.ball.step();

    // 6. Commit platform motion; a carried ball rides along.
    state.platform.step();
    if state.platform.is_carrying() && state.platform.dx != 0.0 {
        state.ball.rect.pos.x += state.platform.dx;
    }
}
