//! Sprite manifest and load barrier
//!
//! The simulation must not start until every image the frontend draws with
//! has reported loaded. [`Preloader`] is a plain counting barrier: N
//! resources, N load signals, open on the Nth. It is not a cache and does not
//! retry; a resource that never loads simply keeps the barrier shut.

use crate::render::Sprite;

/// Every sprite a frontend needs before the first frame.
pub const SPRITES: [Sprite; 4] = [
    Sprite::Background,
    Sprite::Ball,
    Sprite::Platform,
    Sprite::Block,
];

/// Counting barrier for resource loading.
#[derive(Debug)]
pub struct Preloader {
    required: usize,
    loaded: usize,
}

impl Preloader {
    /// Barrier sized to the sprite manifest.
    pub fn new() -> Self {
        Self::with_required(SPRITES.len())
    }

    pub fn with_required(required: usize) -> Self {
        Self {
            required,
            loaded: 0,
        }
    }

    /// Record one load signal; returns true once every resource is in.
    pub fn resource_loaded(&mut self) -> bool {
        self.loaded += 1;
        log::debug!("resource loaded ({}/{})", self.loaded, self.required);
        self.is_ready()
    }

    pub fn is_ready(&self) -> bool {
        self.loaded >= self.required
    }
}

impl Default for Preloader {
    fn default() -> Self {
        Self::new()
    }
}
