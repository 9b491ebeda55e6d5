//! Entity spawning
//!
//! Obstacles arrive on a randomized schedule (a target frame rolled from
//! the run RNG); collectibles arrive on a fixed frame cadence with
//! randomized altitude and drift speed. All randomness comes from the
//! seeded generator in [`GameState`] so runs replay deterministically.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Collectible, GameState, Obstacle};
use crate::consts::*;

/// Roll the frame for the first obstacle of a run
pub fn first_obstacle_frame(rng: &mut Pcg32) -> u64 {
    let (lo, hi) = FIRST_OBSTACLE_FRAME;
    rng.random_range(lo..hi)
}

/// Spawn an obstacle once the scheduled frame is reached, then reschedule
pub fn maybe_spawn_obstacle(state: &mut GameState) {
    if state.frame < state.next_obstacle_frame {
        return;
    }
    let id = state.next_entity_id();
    state.obstacles.push(Obstacle::new(id));

    let (lo, hi) = OBSTACLE_GAP_FRAMES;
    let gap = state.rng.random_range(lo..hi);
    state.next_obstacle_frame = state.frame + gap;
    log::debug!(
        "spawned obstacle {id} at frame {}, next at {}",
        state.frame,
        state.next_obstacle_frame
    );
}

/// Spawn a collectible on the fixed cadence
///
/// Timing is deterministic (every [`COLLECTIBLE_CADENCE`] frames); only the
/// start altitude and drift speed are rolled per instance.
pub fn maybe_spawn_collectible(state: &mut GameState) {
    if state.frame == 0 || state.frame % COLLECTIBLE_CADENCE != 0 {
        return;
    }
    let (y_lo, y_hi) = COLLECTIBLE_Y_RANGE;
    let (s_lo, s_hi) = COLLECTIBLE_SPEED_RANGE;
    let start_y = state.rng.random_range(y_lo..y_hi);
    let speed = state.rng.random_range(s_lo..s_hi);

    let id = state.next_entity_id();
    state.collectibles.push(Collectible::new(id, start_y, speed));
    log::debug!("spawned collectible {id} at frame {} (y={start_y:.1})", state.frame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::RunState;

    fn running_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.reset_run();
        assert_eq!(state.run_state, RunState::Running);
        state
    }

    #[test]
    fn test_obstacle_waits_for_scheduled_frame() {
        let mut state = running_state(1);
        state.frame = state.next_obstacle_frame - 1;
        maybe_spawn_obstacle(&mut state);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_obstacle_spawns_at_right_edge_and_reschedules() {
        let mut state = running_state(1);
        state.frame = state.next_obstacle_frame;
        maybe_spawn_obstacle(&mut state);

        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos.x, FIELD_WIDTH);
        assert_eq!(state.obstacles[0].pos.y, OBSTACLE_Y);

        let gap = state.next_obstacle_frame - state.frame;
        let (lo, hi) = OBSTACLE_GAP_FRAMES;
        assert!(gap >= lo && gap < hi);
    }

    #[test]
    fn test_collectible_cadence() {
        let mut state = running_state(2);

        state.frame = COLLECTIBLE_CADENCE - 1;
        maybe_spawn_collectible(&mut state);
        assert!(state.collectibles.is_empty());

        state.frame = COLLECTIBLE_CADENCE;
        maybe_spawn_collectible(&mut state);
        assert_eq!(state.collectibles.len(), 1);

        let c = &state.collectibles[0];
        assert_eq!(c.pos.x, FIELD_WIDTH);
        let (y_lo, y_hi) = COLLECTIBLE_Y_RANGE;
        assert!(c.pos.y >= y_lo && c.pos.y < y_hi);
        let (s_lo, s_hi) = COLLECTIBLE_SPEED_RANGE;
        assert!(c.speed >= s_lo && c.speed < s_hi);
    }

    #[test]
    fn test_frame_zero_never_spawns_collectible() {
        let mut state = running_state(3);
        state.frame = 0;
        maybe_spawn_collectible(&mut state);
        assert!(state.collectibles.is_empty());
    }

    #[test]
    fn test_same_seed_same_schedule() {
        let a = running_state(99);
        let b = running_state(99);
        assert_eq!(a.next_obstacle_frame, b.next_obstacle_frame);
    }
}
