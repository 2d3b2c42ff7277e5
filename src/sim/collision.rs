//! Collision resolution between moving actors and static platforms
//!
//! The simulation integrates first and resolves after: an actor's position is
//! advanced by its velocity, then every overlapping platform pushes it back
//! out. The side of the hit is disambiguated by reconstructing the pre-move
//! edge from the velocity that was just applied.

use glam::Vec2;

use super::rect::Aabb;

/// Which face of the platform the actor entered through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Landed on the platform's top surface
    Top,
    /// Bumped the platform's underside
    Bottom,
    /// Hit the platform's left face moving right
    Left,
    /// Hit the platform's right face moving left
    Right,
}

/// Resolve an overlap between a moved actor and a static platform.
///
/// `vel` must be the displacement applied to `body` this tick. On overlap the
/// body is snapped flush to the face it entered through and the side is
/// returned; the velocity policy (zeroing an axis vs. reversing patrol
/// direction) stays with the caller.
///
/// The four side checks run in a fixed order and the first match wins. A fast
/// diagonal overlap can fail all four reconstructions, in which case the
/// overlap is left unresolved for this tick. This is not a swept test:
/// sufficiently fast motion can tunnel through thin platforms.
pub fn resolve(body: &mut Aabb, vel: Vec2, platform: &Aabb) -> Option<Side> {
    if !body.overlaps(platform) {
        return None;
    }

    if body.bottom() - vel.y <= platform.top() {
        body.pos.y = platform.top() - body.size.y;
        Some(Side::Top)
    } else if body.top() - vel.y >= platform.bottom() {
        body.pos.y = platform.bottom();
        Some(Side::Bottom)
    } else if body.right() - vel.x <= platform.left() {
        body.pos.x = platform.left() - body.size.x;
        Some(Side::Left)
    } else if body.left() - vel.x >= platform.right() {
        body.pos.x = platform.right();
        Some(Side::Right)
    } else {
        None
    }
}
