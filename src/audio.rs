//! Sound cue boundary
//!
//! The core fires named cues at transition points and never inspects
//! playback state. Implementations are best effort: a backend that cannot
//! play should log and stay silent rather than surface an error.

use serde::{Deserialize, Serialize};

/// Named sound cues fired by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Player left the ground (single or double jump)
    Jump,
    /// Collectible gathered
    Collect,
    /// Obstacle hit, run over
    Crash,
    /// Background music loop, started on run start and stopped on crash
    Music,
}

/// Mute categories, toggled independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCategory {
    Music,
    Effects,
}

impl SoundCue {
    /// Which mute category silences this cue
    pub fn category(self) -> SoundCategory {
        match self {
            SoundCue::Music => SoundCategory::Music,
            SoundCue::Jump | SoundCue::Collect | SoundCue::Crash => SoundCategory::Effects,
        }
    }
}

/// Audio playback service
pub trait Sound {
    fn play(&mut self, cue: SoundCue);
    fn stop(&mut self, cue: SoundCue);
    fn set_muted(&mut self, category: SoundCategory, muted: bool);
}

/// Backend that plays nothing; for headless runs and tests
#[derive(Debug, Default)]
pub struct NullSound;

impl Sound for NullSound {
    fn play(&mut self, _cue: SoundCue) {}
    fn stop(&mut self, _cue: SoundCue) {}
    fn set_muted(&mut self, _category: SoundCategory, _muted: bool) {}
}

/// Backend that logs every cue; used by the demo binary
#[derive(Debug, Default)]
pub struct LogSound {
    music_muted: bool,
    effects_muted: bool,
}

impl LogSound {
    fn muted(&self, category: SoundCategory) -> bool {
        match category {
            SoundCategory::Music => self.music_muted,
            SoundCategory::Effects => self.effects_muted,
        }
    }
}

impl Sound for LogSound {
    fn play(&mut self, cue: SoundCue) {
        if !self.muted(cue.category()) {
            log::debug!("sound: play {cue:?}");
        }
    }

    fn stop(&mut self, cue: SoundCue) {
        log::debug!("sound: stop {cue:?}");
    }

    fn set_muted(&mut self, category: SoundCategory, muted: bool) {
        match category {
            SoundCategory::Music => self.music_muted = muted,
            SoundCategory::Effects => self.effects_muted = muted,
        }
        log::info!("sound: {category:?} muted={muted}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_categories() {
        assert_eq!(SoundCue::Music.category(), SoundCategory::Music);
        assert_eq!(SoundCue::Jump.category(), SoundCategory::Effects);
        assert_eq!(SoundCue::Collect.category(), SoundCategory::Effects);
        assert_eq!(SoundCue::Crash.category(), SoundCategory::Effects);
    }
}
