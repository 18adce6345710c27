//! Render boundary
//!
//! The core never draws. Once per frame, strictly after the update, it hands
//! a read-only snapshot of the world to whatever [`DrawSurface`] the frontend
//! provides; how the sprites turn into pixels is not the core's business.

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::sim::{GameState, Rect};

/// Drawable sprites, keyed abstractly. The frontend owns the actual images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Background,
    Ball,
    Platform,
    Block,
}

/// What a frontend must provide to display a frame.
pub trait DrawSurface {
    fn clear(&mut self);
    fn draw(&mut self, sprite: Sprite, rect: Rect);
}

/// Read-only view of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub ball: Rect,
    pub platform: Rect,
    /// Active blocks only; broken blocks are never drawn.
    pub blocks: Vec<Rect>,
}

impl FrameSnapshot {
    /// Capture the post-update state for this frame.
    pub fn capture(state: &GameState) -> Self {
        Self {
            ball: state.ball.rect,
            platform: state.platform.rect,
            blocks: state
                .blocks
                .iter()
                .filter(|b| b.active)
                .map(|b| b.rect)
                .collect(),
        }
    }

    /// Issue the frame's draw calls: background first, then ball, platform,
    /// and the surviving blocks.
    pub fn draw(&self, surface: &mut impl DrawSurface) {
        surface.clear();
        surface.draw(
            Sprite::Background,
            Rect::new(0.0, 0.0, WORLD_WIDTH, WORLD_HEIGHT),
        );
        surface.draw(Sprite::Ball, self.ball);
        surface.draw(Sprite::Platform, self.platform);
        for rect in &self.blocks {
            surface.draw(Sprite::Block, *rect);
        }
    }
}
