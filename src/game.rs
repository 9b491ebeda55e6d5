//! Game shell
//!
//! Owns the simulation state, the pending input queue, and the three
//! collaborators (renderer, sound, score store). Input handlers only
//! enqueue commands; everything is applied at the next frame boundary,
//! where the tick's events are mapped onto cues, persistence, and the
//! screen for the current run state.

use crate::audio::{Sound, SoundCategory, SoundCue};
use crate::highscore::ScoreStore;
use crate::render::{self, Renderer};
use crate::settings::Settings;
use crate::sim::{self, GameEvent, GameState, InputEvent, RunState};

/// A command from the outside world (tap, click, key, UI button)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Start,
    Restart,
    /// Jump press with its wall-clock timestamp
    Jump { at_ms: f64 },
    MuteToggle(SoundCategory),
}

/// The assembled game: simulation plus collaborators
pub struct Game<R, S, P> {
    state: GameState,
    queue: Vec<Command>,
    renderer: R,
    sound: S,
    store: P,
    settings: Settings,
    high_score: u32,
    idle_drawn: bool,
    over_drawn: bool,
}

impl<R: Renderer, S: Sound, P: ScoreStore> Game<R, S, P> {
    pub fn new(seed: u64, renderer: R, sound: S, store: P, settings: Settings) -> Self {
        let high_score = store.get_high_score();
        let mut game = Self {
            state: GameState::new(seed),
            queue: Vec::new(),
            renderer,
            sound,
            store,
            settings,
            high_score,
            idle_drawn: false,
            over_drawn: false,
        };
        game.sound
            .set_muted(SoundCategory::Music, game.settings.music_muted);
        game.sound
            .set_muted(SoundCategory::Effects, game.settings.effects_muted);
        game
    }

    /// Enqueue a command; applied at the start of the next frame
    pub fn handle(&mut self, command: Command) {
        self.queue.push(command);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// True while the frame driver should keep requesting ticks
    pub fn is_simulating(&self) -> bool {
        self.state.run_state == RunState::Running
    }

    /// Execute one frame: drain commands, tick, apply events, render
    ///
    /// Returns the run state after the frame so the driver can stop
    /// scheduling ticks once the run leaves Running.
    pub fn frame(&mut self) -> RunState {
        let mut inputs = Vec::new();
        for command in self.queue.drain(..) {
            match command {
                Command::Start => inputs.push(InputEvent::Start),
                Command::Restart => inputs.push(InputEvent::Restart),
                Command::Jump { at_ms } => inputs.push(InputEvent::Jump { at_ms }),
                Command::MuteToggle(category) => {
                    let muted = self.settings.toggle(category);
                    self.sound.set_muted(category, muted);
                }
            }
        }

        let events = sim::tick(&mut self.state, &inputs);
        for event in events {
            self.apply(event);
        }

        match self.state.run_state {
            RunState::Idle => {
                if !self.idle_drawn {
                    render::draw_idle_preview(&mut self.renderer);
                    self.idle_drawn = true;
                }
            }
            RunState::Running => {
                render::draw_frame(&mut self.renderer, &self.state, self.high_score);
            }
            RunState::GameOver => {
                if !self.over_drawn {
                    render::draw_game_over(&mut self.renderer, &self.state, self.high_score);
                    self.over_drawn = true;
                }
            }
        }

        self.state.run_state
    }

    /// Map one simulation event onto the collaborators
    fn apply(&mut self, event: GameEvent) {
        match event {
            GameEvent::RunStarted => {
                self.over_drawn = false;
                self.sound.play(SoundCue::Music);
            }
            GameEvent::Jumped | GameEvent::DoubleJumped => {
                self.sound.play(SoundCue::Jump);
            }
            GameEvent::Collected { .. } => {
                self.sound.play(SoundCue::Collect);
            }
            GameEvent::Crashed { score } => {
                self.sound.stop(SoundCue::Music);
                self.sound.play(SoundCue::Crash);
                if score > self.high_score {
                    self.high_score = score;
                    self.store.set_high_score(score);
                }
            }
        }
    }
}
