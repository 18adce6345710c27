//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One update per frame, in a fixed step order
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Edge, world_edge_contact};
pub use rect::Rect;
pub use state::{Ball, BallHold, Block, Direction, GamePhase, GameState, Platform, block_grid};
pub use tick::{apply_command, tick};
