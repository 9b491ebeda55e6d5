//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per external tick, per-frame units only
//! - Seeded RNG only
//! - Stable iteration order (spawn order = entity ID order)
//! - Input applied from a drained queue, never mid-frame
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, overlap};
pub use state::{
    AnimationMode, Collectible, GameEvent, GameState, JumpState, Obstacle, Player, RunState,
};
pub use tick::{InputEvent, tick};
