//! Shell configuration
//!
//! Read once at startup by the demo binary from an optional JSON file.
//! The simulation itself never reads these; hosts pass the relevant pieces
//! in when constructing the world.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH, SPAWN_MARGIN};

/// Demo shell settings.
///
/// Missing fields fall back to their defaults, so partial files work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Arena width in world units
    pub arena_width: f32,
    /// Arena height in world units
    pub arena_height: f32,
    /// Fixed RNG seed; absent means derive one from the wall clock
    pub seed: Option<u64>,
    /// Demo run length in simulated seconds
    pub demo_secs: f64,
    /// Simulated seconds between HUD log lines
    pub hud_interval_secs: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            seed: None,
            demo_secs: 60.0,
            hud_interval_secs: 5.0,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file.
    ///
    /// A missing file means defaults; a malformed one is logged and
    /// ignored rather than failing startup.
    pub fn load_or_default(path: &Path) -> Self {
        let settings = match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings at {}, using defaults", path.display());
                Self::default()
            }
        };
        settings.sanitized()
    }

    /// Clamp the arena to the smallest size the spawn margins allow.
    fn sanitized(mut self) -> Self {
        let min_side = SPAWN_MARGIN * 4.0;
        if self.arena_width < min_side || self.arena_height < min_side {
            log::warn!(
                "arena {}x{} too small, clamping to {min_side}",
                self.arena_width,
                self.arena_height
            );
            self.arena_width = self.arena_width.max(min_side);
            self.arena_height = self.arena_height.max(min_side);
        }
        if self.hud_interval_secs <= 0.0 {
            self.hud_interval_secs = 5.0;
        }
        self
    }
}
