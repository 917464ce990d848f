//! Hit tests for the arena's three shapes
//!
//! Bullets are points, the player is a circle, targets are axis-aligned
//! boxes. Everything resolves to a handful of pure predicates; the tick
//! decides what a hit means.

use glam::Vec2;

use crate::consts::{PLAYER_RADIUS, TARGET_SIZE};

/// Whether a point has left the closed arena rectangle [0, w] x [0, h].
///
/// Points exactly on an edge are still inside.
#[inline]
pub fn outside_arena(p: Vec2, arena: Vec2) -> bool {
    p.x < 0.0 || p.x > arena.x || p.y < 0.0 || p.y > arena.y
}

/// Whether a bullet point is inside the player's hit circle.
///
/// Squared-distance test with an exclusive boundary: a bullet exactly
/// `PLAYER_RADIUS` away misses.
#[inline]
pub fn hits_player(bullet: Vec2, player: Vec2) -> bool {
    bullet.distance_squared(player) < PLAYER_RADIUS * PLAYER_RADIUS
}

/// Whether a bullet point is strictly inside a target's box, given the
/// box's top-left corner. All four bounds are exclusive, so a bullet
/// exactly on an edge misses.
#[inline]
pub fn hits_target(bullet: Vec2, target_pos: Vec2) -> bool {
    bullet.x > target_pos.x
        && bullet.x < target_pos.x + TARGET_SIZE
        && bullet.y > target_pos.y
        && bullet.y < target_pos.y + TARGET_SIZE
}
