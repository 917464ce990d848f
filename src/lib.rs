//! Twinshot - a keyboard twin-stick arena shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, combat, phase machine)
//! - `render`: World state to ordered draw commands
//! - `input`: Held-key snapshot consumed by the simulation
//! - `tuning`: Data-driven difficulty model
//! - `highscores`: Session leaderboard
//! - `settings`: Shell configuration

pub mod highscores;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use input::{KeyCode, KeyState};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default arena dimensions
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    /// Player marker radius (drawing and enemy-bullet hit circle)
    pub const PLAYER_RADIUS: f32 = 15.0;
    /// Player spawn distance above the bottom edge
    pub const PLAYER_SPAWN_OFFSET: f32 = 50.0;
    /// Maximum (and starting) player health
    pub const MAX_HEALTH: i32 = 100;
    /// Damage per enemy bullet hit
    pub const BULLET_DAMAGE: i32 = 10;
    /// Health restored when a wave is cleared
    pub const LEVEL_CLEAR_HEAL: i32 = 20;

    /// Edge length of the axis-aligned target box
    pub const TARGET_SIZE: f32 = 30.0;

    /// Bullet marker radius
    pub const BULLET_RADIUS: f32 = 3.0;
    /// Seconds between player shots
    pub const SHOT_COOLDOWN: f32 = 0.2;
    /// Aim vector growth rate, units per second before renormalization
    pub const AIM_SPEED: f32 = 200.0;
    /// Length of the aim indicator line
    pub const AIM_LINE_LENGTH: f32 = 30.0;

    /// Score per kill, multiplied by the current level
    pub const KILL_SCORE: u64 = 100;
    /// Pause between clearing a wave and the next one spawning, in
    /// simulated seconds
    pub const LEVEL_PAUSE_SECS: f64 = 2.0;

    /// Margin kept between spawned targets and the arena edges
    pub const SPAWN_MARGIN: f32 = 20.0;
    /// Upper bound on a fresh target's first shoot timer (frames)
    pub const SPAWN_TIMER_MAX: f32 = 100.0;
    /// Random extra frames added to each shoot interval
    pub const SHOOT_JITTER: f32 = 50.0;
}
