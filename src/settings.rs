//! Game settings and preferences
//!
//! Persisted as a JSON file next to the binary. These gate feedback
//! effects at the host boundary only; the simulation never reads them,
//! so toggling any of them cannot change a session's score or outcome.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Effect and accessibility preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Screen shake on explosions
    pub screen_shake: bool,
    /// Explosion debris particles
    pub particles: bool,
    /// Background starfield
    pub starfield: bool,
    /// FPS counter in the HUD
    pub show_fps: bool,
    /// Reduced motion (suppresses shake)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_shake: true,
            particles: true,
            starfield: true,
            show_fps: false,
            reduced_motion: false,
        }
    }
}

impl Settings {
    const FILE_NAME: &'static str = "starfall-settings.json";
    const ENV_OVERRIDE: &'static str = "STARFALL_SETTINGS";

    /// Settings file location; `STARFALL_SETTINGS` overrides the
    /// default working-directory file.
    pub fn path() -> PathBuf {
        std::env::var_os(Self::ENV_OVERRIDE)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::FILE_NAME))
    }

    /// Load from the settings file, falling back to defaults if the
    /// file is missing or malformed.
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save to the settings file.
    pub fn save(&self) -> io::Result<()> {
        self.save_to(&Self::path())
    }

    fn save_to(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("settings saved to {}", path.display());
        Ok(())
    }

    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }
}
