//! Persistent high-score store
//!
//! A single integer under a fixed key, no schema versioning. The file
//! implementation is best effort: IO or parse failures are logged and the
//! score falls back to zero rather than failing the game.

use std::fs;
use std::path::PathBuf;

/// Storage for the single persisted high score
pub trait ScoreStore {
    fn get_high_score(&self) -> u32;
    fn set_high_score(&mut self, score: u32);
}

/// Fixed file name for the JSON-backed store
pub const STORE_FILE: &str = "sky_runner_highscore.json";

/// High score persisted as a plain JSON integer in a file
#[derive(Debug)]
pub struct JsonScoreStore {
    path: PathBuf,
    cached: u32,
}

impl JsonScoreStore {
    /// Open the store at `dir/STORE_FILE`, loading any existing score
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let path = dir.into().join(STORE_FILE);
        let cached = Self::load(&path);
        Self { path, cached }
    }

    fn load(path: &PathBuf) -> u32 {
        match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str::<u32>(&text) {
                Ok(score) => {
                    log::info!("loaded high score {score}");
                    score
                }
                Err(err) => {
                    log::warn!("corrupt high score file, starting fresh: {err}");
                    0
                }
            },
            Err(_) => {
                log::info!("no high score file, starting fresh");
                0
            }
        }
    }
}

impl ScoreStore for JsonScoreStore {
    fn get_high_score(&self) -> u32 {
        self.cached
    }

    fn set_high_score(&mut self, score: u32) {
        self.cached = score;
        match serde_json::to_string(&score) {
            Ok(json) => {
                if let Err(err) = fs::write(&self.path, json) {
                    log::warn!("failed to save high score: {err}");
                } else {
                    log::info!("high score saved ({score})");
                }
            }
            Err(err) => log::warn!("failed to encode high score: {err}"),
        }
    }
}

/// In-memory store for tests and headless runs
#[derive(Debug, Default)]
pub struct MemoryScoreStore(pub u32);

impl ScoreStore for MemoryScoreStore {
    fn get_high_score(&self) -> u32 {
        self.0
    }

    fn set_high_score(&mut self, score: u32) {
        self.0 = score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryScoreStore::default();
        assert_eq!(store.get_high_score(), 0);
        store.set_high_score(120);
        assert_eq!(store.get_high_score(), 120);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = std::env::temp_dir().join("sky_runner_test_store");
        fs::create_dir_all(&dir).unwrap();
        let _ = fs::remove_file(dir.join(STORE_FILE));

        let mut store = JsonScoreStore::open(&dir);
        assert_eq!(store.get_high_score(), 0);
        store.set_high_score(340);

        let reopened = JsonScoreStore::open(&dir);
        assert_eq!(reopened.get_high_score(), 340);

        let _ = fs::remove_file(dir.join(STORE_FILE));
    }

    #[test]
    fn test_corrupt_file_falls_back_to_zero() {
        let dir = std::env::temp_dir().join("sky_runner_test_corrupt");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(STORE_FILE), "not a number").unwrap();

        let store = JsonScoreStore::open(&dir);
        assert_eq!(store.get_high_score(), 0);

        let _ = fs::remove_file(dir.join(STORE_FILE));
    }
}
