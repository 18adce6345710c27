//! World-boundary contact tests
//!
//! Entity-vs-entity collisions are plain AABB overlaps (see [`Rect`]); the
//! world box needs its own test because each edge reacts differently: side
//! walls and ceiling reflect, the floor ends the session.

use glam::Vec2;

use super::rect::Rect;

/// Which world edge a moving box has reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Floor,
}

/// Test a (predicted) box against the world bounds.
///
/// Edges are checked in fixed priority order - left, right, top, floor - and
/// only the first violation is reported, so at most one reflection happens
/// per frame even when a corner clips two edges at once.
pub fn world_edge_contact(rect: &Rect, bounds: Vec2) -> Option<Edge> {
    if rect.left() < 0.0 {
        Some(Edge::Left)
    } else if rect.right() > bounds.x {
        Some(Edge::Right)
    } else if rect.top() < 0.0 {
        Some(Edge::Top)
    } else if rect.bottom() > bounds.y {
        Some(Edge::Floor)
    } else {
        None
    }
}
