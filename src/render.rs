//! Renderer boundary and scene composition
//!
//! The core never touches assets. It names sprites semantically (animation
//! mode plus run-cycle phase) and hands geometry to a [`Renderer`]; binding
//! those names to actual images is the implementation's job. Draw calls are
//! best effort - an implementation that loses its surface should log and
//! carry on, never fail the frame.

use crate::consts::*;
use crate::sim::{AnimationMode, GameState};

/// Semantic sprite identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    /// Sky backdrop, one field wide
    Background,
    /// Ground strip, one field wide
    Ground,
    /// Player in the given animation mode; `run_phase` selects the
    /// run-cycle frame and is zero for every other mode
    Player {
        mode: AnimationMode,
        run_phase: u32,
    },
    Obstacle,
    Collectible,
}

/// Style hints for text draws; concrete fonts/colors live with the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// In-game score line
    Hud,
    /// Big "Game Over!" banner
    Banner,
    /// Restart affordance label
    Prompt,
}

/// Drawing surface for one composed frame
pub trait Renderer {
    fn clear(&mut self);
    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle);
}

/// Run-cycle phase for the current frame
fn run_phase(frame: u64) -> u32 {
    ((frame / RUN_CYCLE_DIVISOR) % RUN_CYCLE_FRAMES as u64) as u32
}

fn player_sprite(state: &GameState) -> Sprite {
    let phase = match state.player.anim {
        AnimationMode::Running => run_phase(state.frame),
        _ => 0,
    };
    Sprite::Player {
        mode: state.player.anim,
        run_phase: phase,
    }
}

/// Draw the two copies of a looping layer at its scroll offset
fn draw_looping_layer(r: &mut dyn Renderer, sprite: Sprite, offset: f32, y: f32, h: f32) {
    r.draw_image(sprite, offset, y, FIELD_WIDTH, h);
    r.draw_image(sprite, offset + FIELD_WIDTH, y, FIELD_WIDTH, h);
}

/// Compose one running frame: backdrop, ground, entities, player, HUD
pub fn draw_frame(r: &mut dyn Renderer, state: &GameState, high_score: u32) {
    r.clear();
    draw_looping_layer(r, Sprite::Background, state.scroll.background, 0.0, FIELD_HEIGHT);
    draw_looping_layer(r, Sprite::Ground, state.scroll.ground, GROUND_Y, GROUND_HEIGHT);

    for c in &state.collectibles {
        r.draw_image(Sprite::Collectible, c.pos.x, c.pos.y, c.size.x, c.size.y);
    }
    for o in &state.obstacles {
        r.draw_image(Sprite::Obstacle, o.pos.x, o.pos.y, o.size.x, o.size.y);
    }

    let p = &state.player;
    r.draw_image(player_sprite(state), p.pos.x, p.pos.y, p.size.x, p.size.y);

    r.draw_text(&format!("Score: {}", state.score), 20.0, 40.0, TextStyle::Hud);
    r.draw_text(&format!("High: {high_score}"), 20.0, 70.0, TextStyle::Hud);
}

/// Static preview shown once before the first start
pub fn draw_idle_preview(r: &mut dyn Renderer) {
    r.clear();
    r.draw_image(Sprite::Background, 0.0, 0.0, FIELD_WIDTH, FIELD_HEIGHT);
    r.draw_image(Sprite::Ground, 0.0, GROUND_Y, FIELD_WIDTH, GROUND_HEIGHT);
    r.draw_image(
        Sprite::Player {
            mode: AnimationMode::Idle,
            run_phase: 0,
        },
        PLAYER_X,
        crate::resting_y(PLAYER_HEIGHT),
        PLAYER_WIDTH,
        PLAYER_HEIGHT,
    );
}

/// Terminal screen: message, run score, best score, restart affordance
///
/// Drawn over the final frame, which still shows the obstacle that ended
/// the run.
pub fn draw_game_over(r: &mut dyn Renderer, state: &GameState, high_score: u32) {
    draw_frame(r, state, high_score);

    let cx = FIELD_WIDTH / 2.0;
    let cy = FIELD_HEIGHT / 2.0;
    r.draw_text("Game Over!", cx - 130.0, cy - 60.0, TextStyle::Banner);
    r.draw_text(&format!("Score: {}", state.score), cx - 60.0, cy - 15.0, TextStyle::Hud);
    r.draw_text(&format!("Best: {high_score}"), cx - 55.0, cy + 25.0, TextStyle::Hud);
    r.draw_text("Restart", cx - 45.0, cy + 95.0, TextStyle::Prompt);
}

/// Renderer that draws nothing; for headless runs and tests
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn clear(&mut self) {}
    fn draw_image(&mut self, _sprite: Sprite, _x: f32, _y: f32, _w: f32, _h: f32) {}
    fn draw_text(&mut self, _text: &str, _x: f32, _y: f32, _style: TextStyle) {}
}

/// Renderer that records every call, for asserting on draw order in tests
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub clears: u32,
    pub images: Vec<(Sprite, f32, f32)>,
    pub texts: Vec<(String, TextStyle)>,
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.clears += 1;
    }

    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32, _w: f32, _h: f32) {
        self.images.push((sprite, x, y));
    }

    fn draw_text(&mut self, text: &str, _x: f32, _y: f32, style: TextStyle) {
        self.texts.push((text.to_string(), style));
    }
}
