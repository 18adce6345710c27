//! Game settings
//!
//! Grid dimensions, entity speeds, and the RNG seed, persisted as a JSON
//! file next to the binary. Missing or malformed files fall back to the
//! defaults; loaded values are validated so the grid always fits the world.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable game configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Block grid dimensions
    pub rows: u32,
    pub cols: u32,
    /// Speeds in pixels per frame
    pub ball_speed: f32,
    pub platform_speed: f32,
    /// Fixed RNG seed for reproducible sessions; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 8,
            ball_speed: BALL_SPEED,
            platform_speed: PLATFORM_SPEED,
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults when the
    /// file is missing or malformed.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings.validated()
                }
                Err(e) => {
                    log::warn!("ignoring malformed settings {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }

    /// Clamp loaded values into the playable range: at least one block, the
    /// whole grid inside the world above the platform, positive speeds.
    pub fn validated(mut self) -> Self {
        let max_cols = ((WORLD_WIDTH - GRID_ORIGIN_X - BLOCK_WIDTH) / GRID_PITCH_X) as u32 + 1;
        let max_rows =
            ((PLATFORM_START_Y - GRID_ORIGIN_Y - BLOCK_HEIGHT) / GRID_PITCH_Y) as u32 + 1;

        if self.cols < 1 || self.cols > max_cols {
            log::warn!("cols {} out of range, clamping to 1..={max_cols}", self.cols);
            self.cols = self.cols.clamp(1, max_cols);
        }
        if self.rows < 1 || self.rows > max_rows {
            log::warn!("rows {} out of range, clamping to 1..={max_rows}", self.rows);
            self.rows = self.rows.clamp(1, max_rows);
        }
        if self.ball_speed <= 0.0 {
            log::warn!("ball_speed {} invalid, using default", self.ball_speed);
            self.ball_speed = BALL_SPEED;
        }
        if self.platform_speed <= 0.0 {
            log::warn!("platform_speed {} invalid, using default", self.platform_speed);
            self.platform_speed = PLATFORM_SPEED;
        }
        self
    }
}
