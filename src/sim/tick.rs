//! Per-frame simulation step
//!
//! One `tick` advances the world by a single frame: restart handling, the
//! death check, the deferred wave transition, player movement and aim, the
//! bullet pass, then the target pass. Later steps read what earlier steps
//! wrote in the same frame, so the order is part of the contract.

use glam::Vec2;
use rand::Rng;

use super::collision;
use super::state::{Bullet, PendingTransition, Phase, Target, WorldState};
use crate::consts::*;
use crate::input::{KeyCode, KeyState};
use crate::tuning::{self, DifficultyParams};

/// Advance the world by one frame.
///
/// `keys` is the host's held-key snapshot and `dt` the seconds elapsed
/// since the previous call (0 on the first frame). Bullets and the aim
/// vector integrate with `dt`; player and target movement is per-frame.
pub fn tick(world: &mut WorldState, keys: &KeyState, dt: f32) {
    // The virtual clock runs in every phase; the deferred wave transition
    // compares against it.
    world.clock += f64::from(dt);

    // Restart is only honored on the game-over screen. The reset frame
    // then continues as a normal playing frame.
    if world.phase == Phase::GameOver && keys.is_held(KeyCode::KeyR) {
        reset_game(world);
    }

    if world.player_health <= 0 {
        if world.phase != Phase::GameOver {
            log::info!(
                "game over at level {} with score {}",
                world.level,
                world.score
            );
        }
        world.phase = Phase::GameOver;
        world.high_score = world.high_score.max(world.score);
        return;
    }

    if world.phase == Phase::LevelComplete {
        let due = world
            .pending_transition
            .is_some_and(|p| world.clock >= p.fire_at);
        if !due {
            return;
        }
        world.pending_transition = None;
        world.phase = Phase::Playing;
        spawn_targets(world);
        // The resume frame falls through and plays normally.
    }

    if world.phase != Phase::Playing {
        return;
    }

    let params = tuning::difficulty_params(world.level);

    move_player(world, keys, &params);
    steer_aim(world, keys, dt);

    world.shoot_cooldown -= dt; // may run negative; only compared against zero

    if keys.is_held(KeyCode::Space) && world.shoot_cooldown <= 0.0 && world.aim_dir != Vec2::ZERO {
        world.bullets.push(Bullet {
            pos: world.player_pos,
            vel: world.aim_dir * params.bullet_speed,
            friendly: true,
        });
        world.shoot_cooldown = SHOT_COOLDOWN;
    }

    update_bullets(world, dt);
    update_targets(world, &params);
}

/// Restore a fresh run. Only honored from the game-over screen. The
/// session high score, the clock and the RNG stream all carry over.
pub fn reset_game(world: &mut WorldState) {
    if world.phase != Phase::GameOver {
        return;
    }
    world.player_health = MAX_HEALTH;
    world.player_pos = WorldState::player_spawn(world.arena);
    world.bullets.clear();
    world.level = 1;
    world.score = 0;
    world.phase = Phase::Playing;
    world.aim_dir = Vec2::ZERO;
    world.pending_transition = None;
    spawn_targets(world);
    log::info!("run restarted");
}

/// Populate the upper third of the arena with the current level's wave.
///
/// Replaces whatever targets exist. Positions, drift velocities and first
/// shoot timers all come from the world RNG.
pub fn spawn_targets(world: &mut WorldState) {
    let params = tuning::difficulty_params(world.level);
    let arena = world.arena;
    let speed = params.target_speed;

    world.targets.clear();
    for _ in 0..params.target_count {
        let pos = Vec2::new(
            world.rng.random_range(SPAWN_MARGIN..arena.x - SPAWN_MARGIN),
            world
                .rng
                .random_range(SPAWN_MARGIN..arena.y / 3.0 + SPAWN_MARGIN),
        );
        let vel = Vec2::new(
            world.rng.random_range(-speed / 2.0..speed / 2.0),
            world.rng.random_range(-speed / 2.0..speed / 2.0),
        );
        world.targets.push(Target {
            pos,
            vel,
            shoot_timer: world.rng.random_range(0.0..SPAWN_TIMER_MAX),
            health: params.enemy_health,
        });
    }

    log::info!(
        "level {}: {} targets, {} hp each",
        world.level,
        world.targets.len(),
        params.enemy_health
    );
}

/// Arrow-key movement: a fixed step per frame, gated on the current
/// position being strictly inside the bound, then clamped to the arena.
fn move_player(world: &mut WorldState, keys: &KeyState, params: &DifficultyParams) {
    let speed = params.player_speed;
    let arena = world.arena;
    let p = &mut world.player_pos;

    if keys.is_held(KeyCode::ArrowLeft) && p.x > 0.0 {
        p.x -= speed;
    }
    if keys.is_held(KeyCode::ArrowRight) && p.x < arena.x {
        p.x += speed;
    }
    if keys.is_held(KeyCode::ArrowUp) && p.y > 0.0 {
        p.y -= speed;
    }
    if keys.is_held(KeyCode::ArrowDown) && p.y < arena.y {
        p.y += speed;
    }

    *p = p.clamp(Vec2::ZERO, arena);
}

/// WASD accumulates into the aim vector, which is then renormalized.
/// A zero vector means "no aim set" and stays zero.
fn steer_aim(world: &mut WorldState, keys: &KeyState, dt: f32) {
    let step = AIM_SPEED * dt;

    if keys.is_held(KeyCode::KeyA) {
        world.aim_dir.x -= step;
    }
    if keys.is_held(KeyCode::KeyD) {
        world.aim_dir.x += step;
    }
    if keys.is_held(KeyCode::KeyW) {
        world.aim_dir.y -= step;
    }
    if keys.is_held(KeyCode::KeyS) {
        world.aim_dir.y += step;
    }

    world.aim_dir = world.aim_dir.normalize_or_zero();
}

/// Integrate and collide every bullet.
///
/// Reverse index order keeps removals from disturbing bullets not yet
/// visited; each bullet is removed at most once per frame.
fn update_bullets(world: &mut WorldState, dt: f32) {
    let mut i = world.bullets.len();
    while i > 0 {
        i -= 1;

        let bullet = &mut world.bullets[i];
        bullet.pos += bullet.vel * dt;
        let pos = bullet.pos;
        let friendly = bullet.friendly;

        if collision::outside_arena(pos, world.arena) {
            world.bullets.remove(i);
            continue;
        }

        if !friendly {
            if collision::hits_player(pos, world.player_pos) {
                world.player_health = (world.player_health - BULLET_DAMAGE).max(0);
                world.bullets.remove(i);
            }
            continue;
        }

        // Friendly bullet: the first containing target takes the hit,
        // scanning newest target first.
        let mut j = world.targets.len();
        while j > 0 {
            j -= 1;
            if !collision::hits_target(pos, world.targets[j].pos) {
                continue;
            }

            world.targets[j].health -= 1;
            world.bullets.remove(i);

            if world.targets[j].health <= 0 {
                world.targets.remove(j);
                world.score += u64::from(world.level) * KILL_SCORE;
                if world.targets.is_empty() {
                    complete_level(world);
                }
            }
            break;
        }
    }
}

/// Wave cleared: advance the level, heal, and schedule the resume. The
/// rest of the frame still runs, so stray enemy bullets keep flying.
fn complete_level(world: &mut WorldState) {
    world.level += 1;
    world.phase = Phase::LevelComplete;
    world.player_health = (world.player_health + LEVEL_CLEAR_HEAL).min(MAX_HEALTH);
    world.pending_transition = Some(PendingTransition {
        fire_at: world.clock + LEVEL_PAUSE_SECS,
    });
    log::info!("level {} complete, score {}", world.level - 1, world.score);
}

/// Drift, bounce and fire for every remaining target.
fn update_targets(world: &mut WorldState, params: &DifficultyParams) {
    let arena = world.arena;
    let player = world.player_pos;

    for target in &mut world.targets {
        // Drift is per-frame, not scaled by dt.
        target.pos += target.vel;

        if target.pos.x <= 0.0 || target.pos.x + TARGET_SIZE >= arena.x {
            target.vel.x = -target.vel.x;
        }
        if target.pos.y <= 0.0 || target.pos.y + TARGET_SIZE >= arena.y {
            target.vel.y = -target.vel.y;
        }

        target.shoot_timer -= 1.0;
        if target.shoot_timer <= 0.0 {
            let dir = (player - target.center()).normalize_or_zero();
            if dir == Vec2::ZERO {
                // Player sits exactly on the target center. Hold fire and
                // retry once there is a direction to shoot along.
                continue;
            }
            world.bullets.push(Bullet {
                pos: target.center(),
                vel: dir * params.enemy_bullet_speed,
                friendly: false,
            });
            target.shoot_timer =
                params.shoot_interval + world.rng.random_range(0.0..SHOOT_JITTER);
        }
    }
}
