//! Sky Runner - a side-scrolling jump-and-collect arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, run state)
//! - `game`: Shell tying the simulation to its collaborators
//! - `render`: Renderer boundary (semantic sprites, scene composition)
//! - `audio`: Sound cue boundary
//! - `highscore`: Persistent high-score store
//! - `settings`: Audio preferences

pub mod audio;
pub mod game;
pub mod highscore;
pub mod render;
pub mod settings;
pub mod sim;

pub use game::{Command, Game};
pub use highscore::ScoreStore;
pub use settings::Settings;

/// Game configuration constants
///
/// All tunables live here and the simulation reads nothing else. Units are
/// pixels and frames: the sim advances one discrete step per display
/// refresh, so speeds are per-frame.
pub mod consts {
    /// Play-field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Height of the ground strip at the bottom of the field
    pub const GROUND_HEIGHT: f32 = 100.0;
    /// Top of the ground strip (the line entities rest on)
    pub const GROUND_Y: f32 = FIELD_HEIGHT - GROUND_HEIGHT;

    /// Gravitational acceleration (px/frame^2)
    pub const GRAVITY: f32 = 0.6;
    /// Initial upward speed of a jump (px/frame)
    pub const JUMP_POWER: f32 = 15.0;
    /// Velocity multiplier applied by the double jump
    pub const DOUBLE_JUMP_BOOST: f32 = 1.5;
    /// Wall-clock window between jump inputs that counts as a double tap
    pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;

    /// Player geometry - x never changes, only y
    pub const PLAYER_X: f32 = 150.0;
    pub const PLAYER_WIDTH: f32 = 130.0;
    pub const PLAYER_HEIGHT: f32 = 130.0;
    /// How far a grounded sprite sinks into the ground strip
    pub const LANDING_OFFSET: f32 = 10.0;

    /// Padding subtracted from every side of the player's hitbox
    pub const HITBOX_INSET: f32 = 8.0;

    /// Obstacle geometry and scroll speed
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const OBSTACLE_HEIGHT: f32 = 70.0;
    pub const OBSTACLE_SPEED: f32 = 6.0;
    /// Obstacles sit slightly below the ground line, like the player
    pub const OBSTACLE_Y: f32 = GROUND_Y - 60.0;

    /// First obstacle spawns at a frame in [min, max)
    pub const FIRST_OBSTACLE_FRAME: (u64, u64) = (60, 160);
    /// Gap in frames between one obstacle and the next, [min, max)
    pub const OBSTACLE_GAP_FRAMES: (u64, u64) = (300, 550);

    /// Collectible geometry
    pub const COLLECTIBLE_WIDTH: f32 = 60.0;
    pub const COLLECTIBLE_HEIGHT: f32 = 90.0;
    /// A collectible spawns every this many frames
    pub const COLLECTIBLE_CADENCE: u64 = 200;
    /// Collectible spawn altitude range [min, max)
    pub const COLLECTIBLE_Y_RANGE: (f32, f32) = (50.0, 150.0);
    /// Collectible leftward speed range [min, max), px/frame
    pub const COLLECTIBLE_SPEED_RANGE: (f32, f32) = (1.0, 2.0);
    /// Vertical bob: y += sin(frame / period) * amplitude each frame
    pub const COLLECTIBLE_BOB_PERIOD: f32 = 30.0;
    pub const COLLECTIBLE_BOB_AMPLITUDE: f32 = 0.5;

    /// Score awarded per collectible
    pub const COLLECT_REWARD: u32 = 10;

    /// Backdrop and ground scroll speeds (px/frame); offsets wrap at -FIELD_WIDTH
    pub const BG_SCROLL_SPEED: f32 = 2.0;
    pub const GROUND_SCROLL_SPEED: f32 = 5.0;

    /// Run-cycle sprite count and how many sim frames each one is held
    pub const RUN_CYCLE_FRAMES: u32 = 5;
    pub const RUN_CYCLE_DIVISOR: u64 = 5;
}

/// Resting y for a grounded sprite of the given height
#[inline]
pub fn resting_y(height: f32) -> f32 {
    consts::GROUND_Y - height + consts::LANDING_OFFSET
}
