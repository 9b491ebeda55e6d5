//! Per-frame simulation tick
//!
//! Core game loop that advances the simulation deterministically: one call
//! per display refresh, inputs drained up front, entities processed in
//! spawn order, and a hit aborting the rest of the frame.

use super::physics;
use super::spawn;
use super::state::{AnimationMode, GameEvent, GameState, RunState};
use crate::consts::*;

/// A discrete input event, queued by the shell and drained at frame start
///
/// Queue-then-drain gives deterministic ordering no matter when the
/// underlying tap/click/key arrived relative to the frame boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Start a run from the Idle screen
    Start,
    /// Restart after GameOver
    Restart,
    /// Jump press; `at_ms` is the wall-clock time of the press, used for
    /// double-tap detection
    Jump { at_ms: f64 },
}

/// Advance the game by one frame
///
/// Drains `inputs` first (state transitions and jump presses), then - only
/// while Running - advances scroll, spawners, collectibles, obstacles, and
/// player physics, in that order. An obstacle hit transitions to GameOver
/// and aborts the remainder of the frame. Returns the events the frame
/// produced, oldest first.
pub fn tick(state: &mut GameState, inputs: &[InputEvent]) -> Vec<GameEvent> {
    let mut events = Vec::new();

    for input in inputs {
        match (*input, state.run_state) {
            (InputEvent::Start, RunState::Idle) | (InputEvent::Restart, RunState::GameOver) => {
                state.reset_run();
                log::info!("run started (seed {})", state.seed);
                events.push(GameEvent::RunStarted);
            }
            (InputEvent::Jump { at_ms }, RunState::Running) => {
                if let Some(event) =
                    physics::request_jump(&mut state.player, at_ms, &mut state.last_jump_input_ms)
                {
                    events.push(event);
                }
            }
            // Start while running, jump while idle/over, etc: ignored
            _ => {}
        }
    }

    if state.run_state != RunState::Running {
        return events;
    }

    state.frame += 1;
    state.scroll.advance();

    // Entities must be processed in spawn order; a deserialized or
    // externally mutated state may not be sorted
    state.normalize_order();

    spawn::maybe_spawn_collectible(state);
    spawn::maybe_spawn_obstacle(state);

    advance_collectibles(state, &mut events);

    if advance_obstacles(state) {
        enter_game_over(state, &mut events);
        // The run is over; nothing else advances this frame
        return events;
    }

    physics::apply_gravity(&mut state.player);

    events
}

/// Move collectibles, collect on overlap, drop the ones that left the field
fn advance_collectibles(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let bob = (state.frame as f32 / COLLECTIBLE_BOB_PERIOD).sin() * COLLECTIBLE_BOB_AMPLITUDE;
    let player_box = state.player.hitbox();

    let mut collected = Vec::new();
    for c in &mut state.collectibles {
        c.pos.x -= c.speed;
        c.pos.y += bob;
        if super::collision::overlap(&player_box, &c.hitbox()) {
            collected.push(c.id);
        }
    }

    for id in collected {
        state.score += COLLECT_REWARD;
        state.collectibles.retain(|c| c.id != id);
        events.push(GameEvent::Collected { score: state.score });
    }

    state.collectibles.retain(|c| !c.off_screen());
}

/// Move obstacles in spawn order; returns true on a player hit
///
/// The colliding obstacle is left in place - the run ends and it stays
/// visible on the terminal frame. Off-screen culling only happens on
/// frames without a hit, which is moot anyway since the frame aborts.
fn advance_obstacles(state: &mut GameState) -> bool {
    let player_box = state.player.hitbox();

    for o in &mut state.obstacles {
        o.pos.x -= OBSTACLE_SPEED;
        if super::collision::overlap(&player_box, &o.hitbox()) {
            return true;
        }
    }

    state.obstacles.retain(|o| !o.off_screen());
    false
}

/// GameOver entry: freeze the sim and mark the player crashed
///
/// Side effects that touch collaborators (high-score persistence, sound,
/// terminal render) belong to the shell, which reacts to the event.
fn enter_game_over(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.run_state = RunState::GameOver;
    state.player.anim = AnimationMode::Crashed;
    log::info!("game over at frame {} with score {}", state.frame, state.score);
    events.push(GameEvent::Crashed { score: state.score });
}
