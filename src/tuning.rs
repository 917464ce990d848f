//! Data-driven game balance
//!
//! Difficulty is a pure function of the level number. Callers recompute it
//! wherever it is read rather than caching it on the world, so a level
//! change shows up everywhere on the next read.

use serde::{Deserialize, Serialize};

/// Tunable parameters for one difficulty level.
///
/// Units are mixed on purpose: target drift and player movement are in
/// units per frame, bullet speeds in units per second. The tick keeps the
/// distinction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyParams {
    /// Target drift speed, units per frame
    pub target_speed: f32,
    /// Enemy bullet speed, units per second
    pub enemy_bullet_speed: f32,
    /// Targets spawned for the wave
    pub target_count: u32,
    /// Frames between enemy shots, before per-shot jitter
    pub shoot_interval: f32,
    /// Player movement speed, units per frame
    pub player_speed: f32,
    /// Player bullet speed, units per second
    pub bullet_speed: f32,
    /// Hit points per target
    pub enemy_health: i32,
}

/// Compute the parameter set for a level (1-based).
///
/// Target count caps at 10 and the shoot interval floors at 50 frames;
/// speeds and target health keep growing without bound.
pub fn difficulty_params(level: u32) -> DifficultyParams {
    let level_f = level as f32;
    DifficultyParams {
        target_speed: 0.2 + 0.1 * level_f,
        enemy_bullet_speed: 150.0 + 25.0 * level_f,
        target_count: 3 + (level / 2).min(7),
        shoot_interval: (150.0 - 10.0 * level_f).max(50.0),
        player_speed: 5.0,
        bullet_speed: 400.0,
        enemy_health: 1 + (level / 5) as i32,
    }
}
