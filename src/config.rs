use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Audio
    pub audio_dir: String,
    pub audio_enabled: bool,
    pub speech_fallback: bool,

    // Decks
    pub default_language: String,
    pub advance_secs: u64,
    pub flip_millis: u64,
    pub flip_timeout_millis: u64,

    // Meta
    pub has_seen_welcome: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            audio_dir: dirs::data_dir()
                .unwrap_or_default()
                .join("indigo/audio")
                .to_string_lossy()
                .to_string(),
            audio_enabled: true,
            speech_fallback: false,
            default_language: crate::content::DEFAULT_LANGUAGE.to_string(),
            advance_secs: 3,
            flip_millis: 500,
            flip_timeout_millis: 2000,
            has_seen_welcome: false,
        }
    }
}

impl Config {
    /// Load config from the default location, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Interval between auto-advance ticks
    pub fn advance_period(&self) -> Duration {
        Duration::from_secs(self.advance_secs.max(1))
    }

    /// Length of the card flip animation
    pub fn flip_duration(&self) -> Duration {
        Duration::from_millis(self.flip_millis)
    }

    /// Longest a flip guard may be held before navigation releases it
    pub fn flip_timeout(&self) -> Duration {
        Duration::from_millis(self.flip_timeout_millis.max(self.flip_millis))
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("indigo")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_language, "English");
        assert_eq!(config.advance_period(), Duration::from_secs(3));
        assert_eq!(config.flip_duration(), Duration::from_millis(500));
        assert!(config.audio_enabled);
        assert!(!config.has_seen_welcome);
    }

    #[test]
    fn test_flip_timeout_never_shorter_than_animation() {
        let config = Config {
            flip_millis: 800,
            flip_timeout_millis: 100,
            ..Config::default()
        };
        assert_eq!(config.flip_timeout(), Duration::from_millis(800));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("indigo/config.json");

        let config = Config {
            has_seen_welcome: true,
            default_language: "Twi".to_string(),
            ..Config::default()
        };
        config.save_to(&path).expect("Failed to save");

        let restored = Config::load_from(&path).expect("Failed to load");
        assert!(restored.has_seen_welcome);
        assert_eq!(restored.default_language, "Twi");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "advance_secs": 5 }"#).expect("Failed to write");

        let config = Config::load_from(&path).expect("Failed to load");
        assert_eq!(config.advance_secs, 5);
        assert_eq!(config.flip_millis, 500);
    }

    #[test]
    fn test_corrupt_file_is_backed_up() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not valid json").expect("Failed to write");

        let config = Config::load_from(&path).expect("Corrupt config should degrade");
        assert_eq!(config.advance_secs, 3);
        assert!(!path.exists());
        assert!(dir.path().join("config.json.corrupt").exists());
    }
}
