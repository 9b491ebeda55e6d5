//! Game state and core simulation types
//!
//! Everything needed to reproduce a run deterministically lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::resting_y;

/// Which part of the game is executing each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Initial state; nothing simulated, a static preview frame is shown
    Idle,
    /// Active gameplay
    Running,
    /// Run ended on an obstacle hit
    GameOver,
}

/// Jump state machine for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpState {
    /// On the ground; velocity is zero
    Grounded,
    /// Airborne from a single jump; double jump still available
    Jumping,
    /// Airborne with the double jump spent; resets only on landing
    DoubleJumped,
}

/// Semantic sprite mode - the renderer maps this to an actual asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationMode {
    Idle,
    Running,
    Jumping,
    Crashed,
}

/// The player character. Singleton: created once, reset on restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Position (x is fixed for the whole run, only y moves)
    pub pos: Vec2,
    /// Sprite size (constant)
    pub size: Vec2,
    /// Vertical velocity, px/frame (positive = falling)
    pub vel_y: f32,
    pub jump: JumpState,
    pub anim: AnimationMode,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, resting_y(PLAYER_HEIGHT)),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vel_y: 0.0,
            jump: JumpState::Grounded,
            anim: AnimationMode::Idle,
        }
    }

    /// Put the player back at rest for a new run
    pub fn reset(&mut self) {
        self.pos.y = self.resting_y();
        self.vel_y = 0.0;
        self.jump = JumpState::Grounded;
        self.anim = AnimationMode::Running;
    }

    /// y-coordinate when standing on the ground line
    pub fn resting_y(&self) -> f32 {
        resting_y(self.size.y)
    }

    /// Collision box, inset on all four sides to be forgiving
    pub fn hitbox(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size).inset(HITBOX_INSET)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A ground obstacle ("trunk"). Scrolls left at a fixed speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    /// Spawn at the right edge of the play-field, on the ground line
    pub fn new(id: u32) -> Self {
        Self {
            id,
            pos: Vec2::new(FIELD_WIDTH, OBSTACLE_Y),
            size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
        }
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// True once the right edge has scrolled past the left boundary
    pub fn off_screen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

/// A floating collectible ("balloon"). Drifts left while bobbing on a sine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    /// Leftward drift, px/frame, rolled per instance
    pub speed: f32,
}

impl Collectible {
    pub fn new(id: u32, start_y: f32, speed: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(FIELD_WIDTH, start_y),
            size: Vec2::new(COLLECTIBLE_WIDTH, COLLECTIBLE_HEIGHT),
            speed,
        }
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn off_screen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

/// Horizontal scroll offsets for the looping backdrop layers.
/// Cosmetic, but reset with the rest of the run state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScrollOffsets {
    pub background: f32,
    pub ground: f32,
}

impl ScrollOffsets {
    /// Advance one frame, wrapping each layer at one field width
    pub fn advance(&mut self) {
        self.background -= BG_SCROLL_SPEED;
        if self.background <= -FIELD_WIDTH {
            self.background = 0.0;
        }
        self.ground -= GROUND_SCROLL_SPEED;
        if self.ground <= -FIELD_WIDTH {
            self.ground = 0.0;
        }
    }
}

/// Things that happened during one tick, for the shell to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A run started (fresh or restart); state was fully reset
    RunStarted,
    /// Player left the ground
    Jumped,
    /// Double jump fired
    DoubleJumped,
    /// A collectible was gathered; score after the reward
    Collected { score: u32 },
    /// Obstacle hit ended the run; final score
    Crashed { score: u32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded generator; all spawn randomness flows through it
    pub rng: Pcg32,
    pub run_state: RunState,
    /// Frames simulated in the current run
    pub frame: u64,
    /// Score for the current run; monotonically non-decreasing
    pub score: u32,
    pub player: Player,
    /// Live obstacles, spawn order
    pub obstacles: Vec<Obstacle>,
    /// Live collectibles, spawn order
    pub collectibles: Vec<Collectible>,
    /// Frame at which the next obstacle appears
    pub next_obstacle_frame: u64,
    pub scroll: ScrollOffsets,
    /// Wall-clock time of the last jump input, for double-tap detection
    pub last_jump_input_ms: f64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game in the Idle state
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            run_state: RunState::Idle,
            frame: 0,
            score: 0,
            player: Player::new(),
            obstacles: Vec::new(),
            collectibles: Vec::new(),
            next_obstacle_frame: 0,
            scroll: ScrollOffsets::default(),
            last_jump_input_ms: f64::NEG_INFINITY,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Full reset on entering Running from Idle or GameOver
    pub fn reset_run(&mut self) {
        self.frame = 0;
        self.score = 0;
        self.scroll = ScrollOffsets::default();
        self.obstacles.clear();
        self.collectibles.clear();
        self.next_obstacle_frame = super::spawn::first_obstacle_frame(&mut self.rng);
        self.player.reset();
        self.last_jump_input_ms = f64::NEG_INFINITY;
        self.run_state = RunState::Running;
    }

    /// Ensure entities are sorted by ID (spawn order) for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.obstacles.sort_by_key(|o| o.id);
        self.collectibles.sort_by_key(|c| c.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_empty() {
        let state = GameState::new(7);
        assert_eq!(state.run_state, RunState::Idle);
        assert_eq!(state.frame, 0);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert!(state.collectibles.is_empty());
        assert_eq!(state.player.anim, AnimationMode::Idle);
    }

    #[test]
    fn test_reset_run_clears_everything() {
        let mut state = GameState::new(7);
        state.frame = 500;
        state.score = 120;
        state.scroll.background = -300.0;
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle::new(id));
        let id = state.next_entity_id();
        state.collectibles.push(Collectible::new(id, 80.0, 1.5));
        state.player.pos.y = 12.0;
        state.player.vel_y = -9.0;
        state.player.jump = JumpState::DoubleJumped;

        state.reset_run();

        assert_eq!(state.run_state, RunState::Running);
        assert_eq!(state.frame, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.scroll.background, 0.0);
        assert!(state.obstacles.is_empty());
        assert!(state.collectibles.is_empty());
        assert_eq!(state.player.pos.y, state.player.resting_y());
        assert_eq!(state.player.vel_y, 0.0);
        assert_eq!(state.player.jump, JumpState::Grounded);
        assert_eq!(state.player.anim, AnimationMode::Running);
        let (lo, hi) = crate::consts::FIRST_OBSTACLE_FRAME;
        assert!(state.next_obstacle_frame >= lo && state.next_obstacle_frame < hi);
    }

    #[test]
    fn test_scroll_wraps_at_field_width() {
        let mut scroll = ScrollOffsets {
            background: -(FIELD_WIDTH - 1.0),
            ground: -(FIELD_WIDTH - 1.0),
        };
        scroll.advance();
        assert_eq!(scroll.background, 0.0);
        assert_eq!(scroll.ground, 0.0);
    }

    #[test]
    fn test_state_serde_round_trip() {
        let mut state = GameState::new(42);
        state.reset_run();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.run_state, RunState::Running);
        assert_eq!(back.next_obstacle_frame, state.next_obstacle_frame);
        assert_eq!(back.seed, state.seed);
    }
}
