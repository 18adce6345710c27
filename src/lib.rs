//! Brick Bounce - a minimal single-screen block-breaking arcade game
//!
//! Core modules:
//! - `sim`: deterministic simulation (entities, AABB collisions, frame tick)
//! - `input`: key-event to command translation
//! - `render`: per-frame snapshot + draw-surface boundary
//! - `assets`: sprite manifest and load barrier
//! - `settings`: data-driven game configuration

pub mod assets;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// World bounds in pixels; top-left corner is (0, 0), y grows downward
    pub const WORLD_WIDTH: f32 = 640.0;
    pub const WORLD_HEIGHT: f32 = 360.0;

    /// Frame pacing for a display-synchronized frontend (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Ball defaults - square sprite, speed in pixels per frame
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_START_X: f32 = 320.0;
    pub const BALL_START_Y: f32 = 280.0;
    pub const BALL_SPEED: f32 = 4.0;

    /// Platform defaults
    pub const PLATFORM_WIDTH: f32 = 100.0;
    pub const PLATFORM_HEIGHT: f32 = 14.0;
    pub const PLATFORM_START_X: f32 = 280.0;
    pub const PLATFORM_START_Y: f32 = 300.0;
    pub const PLATFORM_SPEED: f32 = 6.0;

    /// Block grid layout: fixed cell pitch, offset from the top-left corner
    pub const BLOCK_WIDTH: f32 = 60.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const GRID_ORIGIN_X: f32 = 65.0;
    pub const GRID_ORIGIN_Y: f32 = 35.0;
    pub const GRID_PITCH_X: f32 = 64.0;
    pub const GRID_PITCH_Y: f32 = 24.0;
}
