//! Game settings and preferences
//!
//! Persisted as a small JSON file next to the working directory. Everything
//! has a sensible default, so a missing or unreadable file just means a
//! stock game.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default random seed; every run with it replays the same game against the
/// same inputs.
pub const DEFAULT_SEED: u64 = 15;

const STORAGE_FILE: &str = "plasma-pong.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for the random table
    pub seed: u64,
    /// Window magnification (1, 2 or 4)
    pub window_scale: u32,
    /// Frame pacing target
    pub target_fps: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            window_scale: 2,
            target_fps: 60,
        }
    }
}

impl Settings {
    /// Load settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(Path::new(STORAGE_FILE))
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Write settings back out. Failure is logged, never fatal.
    pub fn save(&self) {
        self.save_to(Path::new(STORAGE_FILE));
    }

    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    log::warn!("Could not save settings to {}: {e}", path.display());
                }
            }
            Err(e) => log::warn!("Could not serialize settings: {e}"),
        }
    }
}
