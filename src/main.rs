//! Sky Runner entry point
//!
//! Headless demo driver: runs the simulation at 60 Hz with logging
//! collaborators and a small auto-player standing in for tap input. The
//! real presentation layer plugs in through the same `Renderer`/`Sound`
//! traits this binary wires up.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use sky_runner::audio::LogSound;
use sky_runner::consts::*;
use sky_runner::highscore::JsonScoreStore;
use sky_runner::render::NullRenderer;
use sky_runner::settings::SETTINGS_FILE;
use sky_runner::sim::{JumpState, RunState};
use sky_runner::{Command, Game, Settings};

/// Frames the demo simulates before exiting
const DEMO_FRAMES: u64 = 3600;
/// How many runs the auto-player gets
const DEMO_RUNS: u32 = 3;
/// The auto-player jumps when an obstacle is this close (px)
const REACTION_DISTANCE: f32 = 220.0;

fn now_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

/// Jump when the nearest obstacle closes within reaction range
///
/// The demo-mode stand-in for a human: it only reads state and enqueues
/// the same discrete commands a tap would.
fn auto_player(game: &Game<NullRenderer, LogSound, JsonScoreStore>) -> Option<Command> {
    let state = game.state();
    if state.player.jump != JumpState::Grounded {
        return None;
    }
    let player_x = state.player.pos.x;
    let incoming = state
        .obstacles
        .iter()
        .filter(|o| o.pos.x + o.size.x > player_x)
        .map(|o| o.pos.x - player_x)
        .fold(f32::INFINITY, f32::min);

    (incoming < REACTION_DISTANCE).then(|| Command::Jump { at_ms: now_ms() })
}

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Sky Runner demo starting (seed {seed})");

    let dir = std::env::current_dir().unwrap_or_default();
    let settings_path = dir.join(SETTINGS_FILE);
    let settings = Settings::load(&settings_path);
    let store = JsonScoreStore::open(dir);
    let mut game = Game::new(seed, NullRenderer, LogSound::default(), store, settings);

    let frame_budget = Duration::from_secs_f64(1.0 / 60.0);
    let mut runs_left = DEMO_RUNS;
    let mut best_this_session = 0u32;

    game.handle(Command::Start);
    for _ in 0..DEMO_FRAMES {
        let frame_start = Instant::now();

        if let Some(command) = auto_player(&game) {
            game.handle(command);
        }

        match game.frame() {
            RunState::Running | RunState::Idle => {}
            RunState::GameOver => {
                best_this_session = best_this_session.max(game.state().score);
                runs_left -= 1;
                if runs_left == 0 {
                    break;
                }
                game.handle(Command::Restart);
            }
        }

        if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    game.settings().save(&settings_path);

    best_this_session = best_this_session.max(game.state().score);
    println!("Demo over.");
    println!("  best score this session: {best_this_session}");
    println!("  all-time high score:     {}", game.high_score());
    println!(
        "  (reaction distance {REACTION_DISTANCE} px, obstacle speed {OBSTACLE_SPEED} px/frame)"
    );
}
