//! Game settings and preferences
//!
//! Loaded from a JSON file natively or from LocalStorage on the web. Any
//! missing field falls back to its default.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Default location of the native high score file
pub const DEFAULT_HIGH_SCORE_PATH: &str = "gate_flyer_highscore.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Physics and world balance
    pub tuning: Tuning,
    /// Pin the gate RNG (random per process when unset)
    pub seed: Option<u64>,
    /// Character to select at startup (ignored if locked)
    pub selected_character: usize,
    /// Native high score file
    pub high_score_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            seed: None,
            selected_character: 0,
            high_score_path: PathBuf::from(DEFAULT_HIGH_SCORE_PATH),
        }
    }
}

impl Settings {
    /// Seed to use for this process
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(crate::platform::random_seed)
    }

    /// Parse settings. A tuning with any problem is replaced by the defaults.
    pub fn from_json(json: &str) -> std::io::Result<Self> {
        let mut settings: Self = serde_json::from_str(json)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        let problems = settings.tuning.problems();
        if !problems.is_empty() {
            for problem in &problems {
                log::warn!("Tuning: {}", problem);
            }
            log::warn!("Using default tuning");
            settings.tuning = Tuning::default();
        }
        Ok(settings)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "gate_flyer_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                match storage.set_item(Self::STORAGE_KEY, &json) {
                    Ok(()) => log::info!("Settings saved"),
                    Err(e) => log::warn!("Couldn't save settings: {:?}", e),
                }
            }
        }
    }

    /// Load settings from a JSON file, or defaults when no path is given.
    ///
    /// Unreadable or malformed files are logged and replaced by defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(path).and_then(|json| Self::from_json(&json)) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Couldn't load settings from {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
