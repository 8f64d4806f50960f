//! Single-integer high score persistence
//!
//! The stored schema is one non-negative integer. Loads fall back to 0 when
//! the file is absent or corrupt; saves are best-effort and never surface
//! to the player. The simulation talks to storage only through the
//! [`HighScoreStore`] trait so the core stays testable without a filesystem.

use std::fs;
use std::path::PathBuf;

/// Storage collaborator for the session high score.
pub trait HighScoreStore {
    /// Read the stored value; absent or corrupt storage reads as 0.
    fn load(&mut self) -> u64;
    /// Overwrite the stored value. Failures are swallowed.
    fn save(&mut self, score: u64);
}

/// Plain-text file store, one integer per file.
#[derive(Debug, Clone)]
pub struct FileHighScores {
    path: PathBuf,
}

impl FileHighScores {
    pub const DEFAULT_PATH: &'static str = "highscore.txt";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for FileHighScores {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATH)
    }
}

impl HighScoreStore for FileHighScores {
    fn load(&mut self) -> u64 {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match contents.trim().parse() {
                Ok(score) => {
                    log::info!("loaded high score {score}");
                    score
                }
                Err(_) => {
                    log::warn!(
                        "corrupt high score file {}, starting at 0",
                        self.path.display()
                    );
                    0
                }
            },
            Err(_) => 0,
        }
    }

    fn save(&mut self, score: u64) {
        if let Err(err) = fs::write(&self.path, score.to_string()) {
            log::warn!("failed to save high score: {err}");
        }
    }
}

/// In-memory store for tests and storage-less shells.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScores {
    pub stored: u64,
}

impl HighScoreStore for MemoryHighScores {
    fn load(&mut self) -> u64 {
        self.stored
    }

    fn save(&mut self, score: u64) {
        self.stored = score;
    }
}
