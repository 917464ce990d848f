//! Twinshot entry point
//!
//! Headless demo: runs the simulation at a fixed 60 Hz step with a
//! scripted autopilot on the same keyboard contract a human host would
//! use, logging HUD lines and a final leaderboard. Rendering hosts replay
//! `render::frame` onto their own surface; here the frames are only built
//! and counted.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use twinshot::input::{KeyCode, KeyState};
use twinshot::sim::{self, Phase, WorldState};
use twinshot::{HighScores, Settings, render};

/// Demo frame step in seconds
const STEP: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let path = std::env::var("TWINSHOT_SETTINGS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("twinshot.json"));
    let settings = Settings::load_or_default(&path);

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("twinshot demo starting with seed {seed}");

    let mut world = WorldState::with_arena(
        seed,
        Vec2::new(settings.arena_width, settings.arena_height),
    );
    sim::spawn_targets(&mut world);

    let mut keys = KeyState::new();
    let mut scores = HighScores::new();
    let mut runs = 0u32;
    let mut run_started = 0.0f64;
    let mut last_hud = 0.0f64;
    let mut prev_phase = world.phase;

    let total_ticks = (settings.demo_secs / f64::from(STEP)).ceil() as u64;
    // First frame gets dt = 0, matching a host that has no previous
    // frame time yet.
    let mut dt = 0.0f32;

    for _ in 0..total_ticks {
        autopilot(&world, &mut keys);
        sim::tick(&mut world, &keys, dt);
        dt = STEP;

        let cmds = render::frame(&world);

        if world.phase != prev_phase {
            match world.phase {
                Phase::GameOver => {
                    runs += 1;
                    let duration = world.clock - run_started;
                    let rank = scores.add_score(world.score, world.level, duration);
                    match rank {
                        Some(rank) => log::info!(
                            "run {runs} over: score {} at level {}, rank {rank} ({duration:.1}s)",
                            world.score,
                            world.level
                        ),
                        None => log::info!(
                            "run {runs} over: score {} at level {} ({duration:.1}s)",
                            world.score,
                            world.level
                        ),
                    }
                    if log::log_enabled!(log::Level::Debug) {
                        if let Ok(json) = serde_json::to_string(&world) {
                            log::debug!("final world: {json}");
                        }
                    }
                }
                Phase::Playing if prev_phase == Phase::GameOver => {
                    run_started = world.clock;
                }
                _ => {}
            }
            prev_phase = world.phase;
        }

        if world.clock - last_hud >= settings.hud_interval_secs {
            last_hud = world.clock;
            log::info!(
                "t={:.1}s score {} level {} health {}% ({} draw cmds)",
                world.clock,
                world.score,
                world.level,
                world.player_health,
                cmds.len()
            );
        }
    }

    log::info!(
        "demo finished at t={:.1}s: {} completed runs, high score {}",
        world.clock,
        runs,
        world.high_score
    );

    println!("\nSession leaderboard:");
    if scores.is_empty() {
        println!("  (no completed runs)");
    }
    for (i, entry) in scores.entries.iter().enumerate() {
        println!(
            "  {:>2}. {:>8} pts  level {:<3} {:>6.1}s",
            i + 1,
            entry.score,
            entry.level,
            entry.duration_secs
        );
    }
}

/// Scripted player on the public keyboard contract.
///
/// Holds a station near the bottom with the arrows, steers the aim vector
/// toward the nearest target with WASD, keeps the trigger held, and taps
/// R on the game-over screen.
fn autopilot(world: &WorldState, keys: &mut KeyState) {
    keys.clear();

    match world.phase {
        Phase::GameOver => {
            keys.press(KeyCode::KeyR);
            return;
        }
        Phase::LevelComplete => return,
        Phase::Playing => {}
    }

    // Hold position centered, a little off the bottom edge.
    let home = Vec2::new(world.arena.x / 2.0, world.arena.y - 80.0);
    if world.player_pos.x < home.x - 10.0 {
        keys.press(KeyCode::ArrowRight);
    }
    if world.player_pos.x > home.x + 10.0 {
        keys.press(KeyCode::ArrowLeft);
    }
    if world.player_pos.y < home.y - 10.0 {
        keys.press(KeyCode::ArrowDown);
    }
    if world.player_pos.y > home.y + 10.0 {
        keys.press(KeyCode::ArrowUp);
    }

    let nearest = world.targets.iter().min_by(|a, b| {
        let da = a.center().distance_squared(world.player_pos);
        let db = b.center().distance_squared(world.player_pos);
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(target) = nearest {
        let want = (target.center() - world.player_pos).normalize_or_zero();
        if want != Vec2::ZERO {
            let aim = world.aim_dir;
            if want.x < aim.x - 0.05 {
                keys.press(KeyCode::KeyA);
            }
            if want.x > aim.x + 0.05 {
                keys.press(KeyCode::KeyD);
            }
            if want.y < aim.y - 0.05 {
                keys.press(KeyCode::KeyW);
            }
            if want.y > aim.y + 0.05 {
                keys.press(KeyCode::KeyS);
            }
            keys.press(KeyCode::Space);
        }
    }
}
