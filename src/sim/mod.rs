//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per host frame, fed the elapsed dt
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use state::{Bullet, PendingTransition, Phase, Target, WorldState};
pub use tick::{reset_game, spawn_targets, tick};
