//! High score storage.

use super::json::{load_json_or_default, save_json, save_path};
use crate::core::constants::HIGH_SCORE_FILE;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where the best score lives between sessions.
pub trait HighScoreStore {
    fn high_score(&self) -> u32;

    /// Store `score` if it strictly beats the current best. Returns true if it did.
    fn set_high_score(&mut self, score: u32) -> bool;

    /// Forget the stored best.
    fn reset(&mut self) -> io::Result<()>;
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for &mut S {
    fn high_score(&self) -> u32 {
        (**self).high_score()
    }

    fn set_high_score(&mut self, score: u32) -> bool {
        (**self).set_high_score(score)
    }

    fn reset(&mut self) -> io::Result<()> {
        (**self).reset()
    }
}

/// In-process store; nothing survives the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHighScoreStore {
    best: u32,
}

impl MemoryHighScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_high_score(best: u32) -> Self {
        Self { best }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn high_score(&self) -> u32 {
        self.best
    }

    fn set_high_score(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    fn reset(&mut self) -> io::Result<()> {
        self.best = 0;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

/// File-backed store. A missing or unreadable file reads as 0.
#[derive(Debug, Clone)]
pub struct JsonHighScoreStore {
    path: PathBuf,
    best: u32,
}

impl JsonHighScoreStore {
    /// Store at ~/.treehop/high_score.json.
    pub fn open_default() -> io::Result<Self> {
        Ok(Self::open(save_path(HIGH_SCORE_FILE)?))
    }

    /// Store at an explicit path.
    pub fn open(path: PathBuf) -> Self {
        let record: HighScoreRecord = load_json_or_default(&path);
        Self {
            path,
            best: record.high_score,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonHighScoreStore {
    fn high_score(&self) -> u32 {
        self.best
    }

    fn set_high_score(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        let record = HighScoreRecord { high_score: score };
        if let Err(e) = save_json(&self.path, &record) {
            warn!("could not save high score to {}: {}", self.path.display(), e);
            return false;
        }
        info!("new high score: {score}");
        self.best = score;
        true
    }

    fn reset(&mut self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        self.best = 0;
        info!("high score reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("treehop_high_score_test_{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_memory_store_only_accepts_higher() {
        let mut store = MemoryHighScoreStore::with_high_score(10);
        assert!(!store.set_high_score(5));
        assert!(!store.set_high_score(10));
        assert_eq!(store.high_score(), 10);
        assert!(store.set_high_score(11));
        assert_eq!(store.high_score(), 11);
    }

    #[test]
    fn test_memory_store_reset() {
        let mut store = MemoryHighScoreStore::with_high_score(7);
        store.reset().unwrap();
        assert_eq!(store.high_score(), 0);
    }

    #[test]
    fn test_missing_file_reads_zero() {
        let store = JsonHighScoreStore::open(scratch("missing.json"));
        assert_eq!(store.high_score(), 0);
    }

    #[test]
    fn test_json_store_persists_across_opens() {
        let path = scratch("persist.json");
        let mut store = JsonHighScoreStore::open(path.clone());
        assert!(store.set_high_score(12));
        assert!(!store.set_high_score(3));

        let reopened = JsonHighScoreStore::open(path.clone());
        assert_eq!(reopened.high_score(), 12);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_json_store_reset_removes_file() {
        let path = scratch("reset.json");
        let mut store = JsonHighScoreStore::open(path.clone());
        store.set_high_score(4);
        assert!(path.exists());

        store.reset().expect("reset should succeed");
        assert_eq!(store.high_score(), 0);
        assert!(!path.exists());
        // Resetting again is fine.
        store.reset().expect("second reset should succeed");
    }

    #[test]
    fn test_store_through_mut_reference() {
        fn record<S: HighScoreStore>(mut store: S, score: u32) -> bool {
            store.set_high_score(score)
        }

        let mut inner = MemoryHighScoreStore::new();
        assert!(record(&mut inner, 3));
        assert_eq!(inner.high_score(), 3);
    }
}
