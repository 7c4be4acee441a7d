//! High score storage backends
//!
//! Features:
//! - `HighScoreStore` seam so the simulation never touches storage directly
//! - JSON file store (native)
//! - LocalStorage store (web)
//! - In-memory store (tests, headless runs)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Persistent home of the best score.
///
/// `load` is called once at startup and must default to 0 when nothing is
/// stored; `save` is called on every new high score.
pub trait HighScoreStore {
    fn load(&mut self) -> u64;
    fn save(&mut self, score: u64);
}

/// On-disk/LocalStorage record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: u64,
}

/// Keeps the score in memory and remembers every save
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: Option<u64>,
    pub saves: Vec<u64>,
}

impl MemoryStore {
    pub fn with_score(score: u64) -> Self {
        Self {
            value: Some(score),
            saves: Vec::new(),
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> u64 {
        self.value.unwrap_or(0)
    }

    fn save(&mut self, score: u64) {
        self.value = Some(score);
        self.saves.push(score);
    }
}

/// JSON file holding a `HighScoreRecord`
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored score; a missing file counts as 0
    pub fn read(&self) -> io::Result<u64> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e),
        };
        let record: HighScoreRecord = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(record.high_score)
    }

    pub fn write(&self, score: u64) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&HighScoreRecord { high_score: score })
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, json)
    }
}

impl HighScoreStore for FileStore {
    fn load(&mut self) -> u64 {
        match self.read() {
            Ok(score) => {
                log::info!("Loaded high score {} from {}", score, self.path.display());
                score
            }
            Err(e) => {
                log::warn!("Couldn't read {}: {} - starting from 0", self.path.display(), e);
                0
            }
        }
    }

    fn save(&mut self, score: u64) {
        match self.write(score) {
            Ok(()) => log::info!("High score {} saved", score),
            Err(e) => log::warn!("Couldn't save high score to {}: {}", self.path.display(), e),
        }
    }
}

/// Browser LocalStorage
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    const STORAGE_KEY: &'static str = "gate_flyer_highscore";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for LocalStorageStore {
    fn load(&mut self) -> u64 {
        let stored = Self::storage()
            .and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten())
            .and_then(|json| serde_json::from_str::<HighScoreRecord>(&json).ok());

        match stored {
            Some(record) => {
                log::info!("Loaded high score {}", record.high_score);
                record.high_score
            }
            None => {
                log::info!("No high score found, starting fresh");
                0
            }
        }
    }

    fn save(&mut self, score: u64) {
        if let Some(storage) = Self::storage() {
            if let Ok(json) = serde_json::to_string(&HighScoreRecord { high_score: score }) {
                match storage.set_item(Self::STORAGE_KEY, &json) {
                    Ok(()) => log::info!("High score {} saved", score),
                    Err(e) => log::warn!("Couldn't save high score {}: {:?}", score, e),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gate_flyer_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_memory_store_defaults_to_zero() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load(), 0);
        store.save(12);
        assert_eq!(store.load(), 12);
        assert_eq!(store.saves, vec![12]);
    }

    #[test]
    fn test_file_store_missing_file() {
        let mut store = FileStore::new(temp_path("missing"));
        assert_eq!(store.read().unwrap(), 0);
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_file_store_round_trip() {
        let path = temp_path("round_trip");
        let mut store = FileStore::new(&path);
        store.save(42);
        assert_eq!(FileStore::new(&path).load(), 42);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_file_store_corrupt_falls_back() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json").unwrap();
        let mut store = FileStore::new(&path);
        assert_eq!(store.read().unwrap_err().kind(), io::ErrorKind::InvalidData);
        assert_eq!(store.load(), 0);
        let _ = fs::remove_file(path);
    }
}
