//! Input boundary
//!
//! Translates key events from the hosting frontend into the three logical
//! commands the simulation understands. The frontend owns the event source;
//! the core only sees commands.

use crate::sim::Direction;

/// Keys the game reacts to. Frontends map their own key codes onto these;
/// everything unbound is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Space,
    Other,
}

/// Logical commands produced by the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveStart(Direction),
    MoveStop,
    Fire,
}

/// Command for a key press, if the key is bound.
pub fn key_down(key: Key) -> Option<Command> {
    match key {
        Key::Left => Some(Command::MoveStart(Direction::Left)),
        Key::Right => Some(Command::MoveStart(Direction::Right)),
        Key::Space => Some(Command::Fire),
        Key::Other => None,
    }
}

/// Command for a key release. Any release stops the platform, whichever key
/// it was; with a single movement axis nothing finer is needed.
pub fn key_up(_key: Key) -> Command {
    Command::MoveStop
}
