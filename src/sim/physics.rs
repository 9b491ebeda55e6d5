//! Player physics and jump input
//!
//! Vertical velocity integration with ceiling/ground clamping, plus the
//! jump / double-jump transition driven by discrete input events.

use super::state::{AnimationMode, GameEvent, JumpState, Player};
use crate::consts::*;

/// Integrate gravity for one frame and clamp to the screen bounds
///
/// Landing zeroes the velocity, re-arms the double jump, and switches the
/// animation back to Running (unless the run already ended in Crashed).
pub fn apply_gravity(player: &mut Player) {
    player.vel_y += GRAVITY;
    player.pos.y += player.vel_y;

    // Ceiling clamp
    if player.pos.y < 0.0 {
        player.pos.y = 0.0;
        player.vel_y = 0.0;
    }

    // Ground clamp / landing
    if player.pos.y + player.size.y >= GROUND_Y {
        player.pos.y = player.resting_y();
        player.vel_y = 0.0;
        player.jump = JumpState::Grounded;
        if player.anim != AnimationMode::Crashed {
            player.anim = AnimationMode::Running;
        }
    }
}

/// Apply one discrete jump input
///
/// `at_ms` is the wall-clock timestamp of the input event; a second press
/// within [`DOUBLE_TAP_WINDOW_MS`] of the previous one while airborne fires
/// the double jump. Eligibility resets only on landing. Returns the event
/// to emit, if the input did anything.
///
/// `last_input_ms` is the sim's record of the previous jump press and is
/// always updated, so the debounce compares consecutive inputs rather than
/// input-to-takeoff.
pub fn request_jump(player: &mut Player, at_ms: f64, last_input_ms: &mut f64) -> Option<GameEvent> {
    let double_tap = at_ms - *last_input_ms < DOUBLE_TAP_WINDOW_MS;
    *last_input_ms = at_ms;

    match player.jump {
        JumpState::Grounded => {
            player.vel_y = -JUMP_POWER;
            player.jump = JumpState::Jumping;
            player.anim = AnimationMode::Jumping;
            Some(GameEvent::Jumped)
        }
        JumpState::Jumping if double_tap => {
            player.vel_y = -JUMP_POWER * DOUBLE_JUMP_BOOST;
            player.jump = JumpState::DoubleJumped;
            // Animation stays Jumping
            Some(GameEvent::DoubleJumped)
        }
        // Single jump spent and the press was too late, or double jump
        // already used: no-op until landing
        JumpState::Jumping | JumpState::DoubleJumped => None,
    }
}
