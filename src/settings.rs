//! Audio preferences
//!
//! Persisted separately from run state, same best-effort JSON handling as
//! the high-score store.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::audio::SoundCategory;

/// Fixed file name for persisted preferences
pub const SETTINGS_FILE: &str = "sky_runner_settings.json";

/// Player preferences
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Settings {
    pub music_muted: bool,
    pub effects_muted: bool,
}

impl Settings {
    pub fn is_muted(&self, category: SoundCategory) -> bool {
        match category {
            SoundCategory::Music => self.music_muted,
            SoundCategory::Effects => self.effects_muted,
        }
    }

    /// Flip one category's mute flag; returns the new value
    pub fn toggle(&mut self, category: SoundCategory) -> bool {
        let flag = match category {
            SoundCategory::Music => &mut self.music_muted,
            SoundCategory::Effects => &mut self.effects_muted,
        };
        *flag = !*flag;
        *flag
    }

    /// Load settings from a JSON file, defaulting on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|err| {
                log::warn!("corrupt settings file, using defaults: {err}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to a JSON file, logging on failure
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("failed to save settings: {err}");
                }
            }
            Err(err) => log::warn!("failed to encode settings: {err}"),
        }
    }
}
