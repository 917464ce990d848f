//! Presentation adapter
//!
//! Translates world state into an ordered list of draw commands once per
//! frame. The commands are backend-agnostic; a host implements [`Surface`]
//! for whatever it paints on and replays frames with [`present`]. Nothing
//! in here mutates the world.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Phase, WorldState};
use crate::tuning;

/// RGBA color, straight (non-premultiplied) channels in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from byte channels.
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }
}

pub const BLACK: Color = Color::from_rgb_u8(0, 0, 0);
pub const GREEN: Color = Color::from_rgb_u8(0, 255, 0);
pub const RED: Color = Color::from_rgb_u8(255, 0, 0);
pub const WHITE: Color = Color::from_rgb_u8(255, 255, 255);
/// Target box fill (hot pink)
pub const PINK: Color = Color::from_rgb_u8(255, 105, 180);
/// Scrim behind the level-complete banner
pub const SCRIM_LIGHT: Color = Color::rgba(0.0, 0.0, 0.0, 0.7);
/// Scrim behind the game-over banner
pub const SCRIM_DARK: Color = Color::rgba(0.0, 0.0, 0.0, 0.9);

pub const FONT_HUD: &str = "20px Arial";
pub const FONT_BANNER: &str = "30px Arial";
pub const FONT_GAME_OVER: &str = "40px Arial";
pub const FONT_FINAL_SCORE: &str = "24px Arial";

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
}

/// One backend-agnostic draw call.
///
/// A frame is an ordered `Vec<DrawCmd>`; replay order is paint order, with
/// later commands covering earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCmd {
    /// Reset the surface for a new frame
    Clear,
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    FillCircle {
        cx: f32,
        cy: f32,
        r: f32,
        color: Color,
    },
    StrokeLine {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Color,
        width: f32,
    },
    FillText {
        text: String,
        x: f32,
        y: f32,
        font: String,
        color: Color,
        align: TextAlign,
    },
}

/// Minimal 2D raster contract a host provides.
pub trait Surface {
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color);
    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color, width: f32);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color, align: TextAlign);
}

/// Replay a frame's command list onto a surface, in order.
pub fn present<S: Surface>(cmds: &[DrawCmd], surface: &mut S) {
    for cmd in cmds {
        match cmd {
            DrawCmd::Clear => surface.clear(),
            DrawCmd::FillRect { x, y, w, h, color } => {
                surface.fill_rect(*x, *y, *w, *h, *color);
            }
            DrawCmd::FillCircle { cx, cy, r, color } => {
                surface.fill_circle(*cx, *cy, *r, *color);
            }
            DrawCmd::StrokeLine {
                x1,
                y1,
                x2,
                y2,
                color,
                width,
            } => {
                surface.stroke_line(*x1, *y1, *x2, *y2, *color, *width);
            }
            DrawCmd::FillText {
                text,
                x,
                y,
                font,
                color,
                align,
            } => {
                surface.fill_text(text, *x, *y, font, *color, *align);
            }
        }
    }
}

#[inline]
fn rect(x: f32, y: f32, w: f32, h: f32, color: Color) -> DrawCmd {
    DrawCmd::FillRect { x, y, w, h, color }
}

#[inline]
fn text(text: String, x: f32, y: f32, font: &str, color: Color, align: TextAlign) -> DrawCmd {
    DrawCmd::FillText {
        text,
        x,
        y,
        font: font.to_string(),
        color,
        align,
    }
}

/// Build the ordered draw list for the current world state.
///
/// Paint order: backdrop, player and health bar, bullets, targets with
/// their health bars, aim line, HUD, then the phase banner if any.
pub fn frame(world: &WorldState) -> Vec<DrawCmd> {
    let params = tuning::difficulty_params(world.level);
    let (w, h) = (world.arena.x, world.arena.y);
    let mut cmds = Vec::with_capacity(16 + world.bullets.len() + world.targets.len() * 3);

    cmds.push(DrawCmd::Clear);
    cmds.push(rect(0.0, 0.0, w, h, BLACK));

    // Player marker with its health bar floating above.
    let p = world.player_pos;
    cmds.push(DrawCmd::FillCircle {
        cx: p.x,
        cy: p.y,
        r: PLAYER_RADIUS,
        color: GREEN,
    });
    cmds.push(rect(p.x - 20.0, p.y - 30.0, 40.0, 5.0, RED));
    let health_frac = world.player_health as f32 / MAX_HEALTH as f32;
    cmds.push(rect(p.x - 20.0, p.y - 30.0, 40.0 * health_frac, 5.0, GREEN));

    for bullet in &world.bullets {
        let color = if bullet.friendly { WHITE } else { RED };
        cmds.push(DrawCmd::FillCircle {
            cx: bullet.pos.x,
            cy: bullet.pos.y,
            r: BULLET_RADIUS,
            color,
        });
    }

    for target in &world.targets {
        cmds.push(rect(target.pos.x, target.pos.y, TARGET_SIZE, TARGET_SIZE, PINK));
        // Health bars only once targets take more than one hit.
        if params.enemy_health > 1 {
            let frac = target.health as f32 / params.enemy_health as f32;
            cmds.push(rect(target.pos.x, target.pos.y - 5.0, TARGET_SIZE, 3.0, RED));
            cmds.push(rect(
                target.pos.x,
                target.pos.y - 5.0,
                TARGET_SIZE * frac,
                3.0,
                GREEN,
            ));
        }
    }

    if world.phase == Phase::Playing && world.aim_dir != Vec2::ZERO {
        let tip = p + world.aim_dir * AIM_LINE_LENGTH;
        cmds.push(DrawCmd::StrokeLine {
            x1: p.x,
            y1: p.y,
            x2: tip.x,
            y2: tip.y,
            color: WHITE,
            width: 2.0,
        });
    }

    cmds.push(text(
        format!("Score: {}", world.score),
        10.0,
        30.0,
        FONT_HUD,
        WHITE,
        TextAlign::Left,
    ));
    cmds.push(text(
        format!("Level: {}", world.level),
        10.0,
        60.0,
        FONT_HUD,
        WHITE,
        TextAlign::Left,
    ));
    cmds.push(text(
        format!("Health: {}%", world.player_health),
        10.0,
        90.0,
        FONT_HUD,
        WHITE,
        TextAlign::Left,
    ));
    cmds.push(text(
        format!("High Score: {}", world.high_score),
        w - 150.0,
        30.0,
        FONT_HUD,
        WHITE,
        TextAlign::Left,
    ));

    match world.phase {
        Phase::Playing => {}
        Phase::LevelComplete => {
            cmds.push(rect(0.0, h / 2.0 - 50.0, w, 100.0, SCRIM_LIGHT));
            cmds.push(text(
                format!("Level {} Complete!", world.level - 1),
                w / 2.0,
                h / 2.0,
                FONT_BANNER,
                WHITE,
                TextAlign::Center,
            ));
            cmds.push(text(
                "Get ready for next level...".to_string(),
                w / 2.0,
                h / 2.0 + 40.0,
                FONT_HUD,
                WHITE,
                TextAlign::Center,
            ));
        }
        Phase::GameOver => {
            cmds.push(rect(0.0, h / 2.0 - 100.0, w, 200.0, SCRIM_DARK));
            cmds.push(text(
                "GAME OVER".to_string(),
                w / 2.0,
                h / 2.0 - 20.0,
                FONT_GAME_OVER,
                RED,
                TextAlign::Center,
            ));
            cmds.push(text(
                format!("Final Score: {}", world.score),
                w / 2.0,
                h / 2.0 + 20.0,
                FONT_FINAL_SCORE,
                WHITE,
                TextAlign::Center,
            ));
            cmds.push(text(
                "Press R to play again".to_string(),
                w / 2.0,
                h / 2.0 + 60.0,
                FONT_HUD,
                WHITE,
                TextAlign::Center,
            ));
        }
    }

    cmds
}
