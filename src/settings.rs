//! Game settings and preferences
//!
//! Read from LocalStorage on the web. The native build reads and writes a
//! JSON file in the working directory. Game rules are not configurable; only
//! presentation and the RNG seed are.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed for reproducible matches (clock-seeded when absent)
    pub seed: Option<u64>,
    /// Show FPS counter
    pub show_fps: bool,
    /// High contrast palette
    pub high_contrast: bool,
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "hop_pong_settings";

    /// Settings file used by the native build
    #[cfg(not(target_arch = "wasm32"))]
    const FILE_NAME: &'static str = "hop_pong_settings.json";

    /// Parse settings JSON; unknown fields are ignored and missing ones defaulted
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse settings, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    /// Seed to use for a new match
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json_or_default(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the working directory (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::load_from(std::path::Path::new(Self::FILE_NAME))
    }

    /// Save settings to the working directory (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        self.save_to(std::path::Path::new(Self::FILE_NAME));
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json_or_default(&json)
            }
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) {
        match self.to_json() {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Could not save settings: {}", e),
            },
            Err(e) => log::warn!("Could not encode settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert!(!settings.show_fps);
        assert!(!settings.high_contrast);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert_eq!(Settings::from_json_or_default("{ nope"), Settings::default());
        assert!(Settings::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(u64::MAX),
            show_fps: true,
            high_contrast: true,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_save_then_load_file() {
        let path = std::env::temp_dir().join(format!("hop_pong_settings_{}.json", std::process::id()));
        let settings = Settings {
            seed: Some(31337),
            ..Default::default()
        };
        settings.save_to(&path);
        assert_eq!(Settings::load_from(&path), settings);
        let _ = std::fs::remove_file(&path);
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_seed_fallback() {
        assert_eq!(Settings::default().seed_or(11), 11);
        let settings = Settings {
            seed: Some(3),
            ..Default::default()
        };
        assert_eq!(settings.seed_or(11), 3);
    }
}
