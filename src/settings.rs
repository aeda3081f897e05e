//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web, `settings.json` natively.

#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::SCALE;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pixels per grid unit
    pub scale: f32,
    /// Fixed RNG seed (coin wobble); time-based when unset
    pub seed: Option<u64>,
    /// Index into the built-in level list
    pub level: usize,
    /// Log at debug level instead of info
    pub debug_logging: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scale: SCALE,
            seed: None,
            level: 0,
            debug_logging: false,
        }
    }
}

impl Settings {
    pub fn log_level(&self) -> log::Level {
        if self.debug_logging {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }

    /// Parse settings JSON. Missing keys take their defaults; a scale that
    /// is not a positive number falls back to the default scale.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        if !(settings.scale.is_finite() && settings.scale > 0.0) {
            log::warn!("Ignoring invalid scale {}", settings.scale);
            settings.scale = SCALE;
        }
        Ok(settings)
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "dark_blue_settings";

    /// Native settings file
    #[allow(dead_code)]
    const SETTINGS_FILE: &'static str = "settings.json";

    /// Load settings from LocalStorage (WASM only). Defaults are stored on
    /// first run.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match storage.get_item(Self::STORAGE_KEY) {
                Ok(Some(json)) => match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Stored settings unreadable: {}", e),
                },
                Ok(None) => {
                    let settings = Self::default();
                    settings.save();
                    return settings;
                }
                Err(_) => {}
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
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from `settings.json` in the working directory
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::SETTINGS_FILE))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        self.save_to(Path::new(Self::SETTINGS_FILE));
    }

    /// Load settings from a JSON file, writing the defaults there if the
    /// file does not exist yet
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("{} parse error: {}; using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let settings = Self::default();
                settings.save_to(path);
                settings
            }
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Could not write {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not serialize settings: {}", e),
        }
    }
}
