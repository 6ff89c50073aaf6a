use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::scoring::{MetricsConfig, ReactionConfig};

/// Artificial delays standing in for the network round-trips of a real
/// analysis backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub enabled: bool,
    pub analyze_ms: u64,
    pub reaction_ms: u64,
    pub insights_ms: u64,
    pub variations_ms: u64,
    pub response_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            analyze_ms: 1500,
            reaction_ms: 1500,
            insights_ms: 800,
            variations_ms: 2000,
            response_ms: 1500,
        }
    }
}

impl LatencyConfig {
    pub fn delay(&self, millis: u64) -> Duration {
        if self.enabled {
            Duration::from_millis(millis)
        } else {
            Duration::ZERO
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub state_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from("data/playback-state.json"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Fixed seed for every random draw; unset means entropy.
    pub seed: Option<u64>,
    pub latency: LatencyConfig,
    pub metrics: MetricsConfig,
    pub reaction: ReactionConfig,
    pub storage: StorageConfig,
}

impl PlaybackConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => Self::read(path)?,
            _ => PlaybackConfig::default(),
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn read(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|err| format!("failed to read config: {}", err))?;
        toml::from_str(&contents).map_err(|err| format!("failed to parse config: {}", err))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload)
            .map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = env::var("PLAYBACK_DATA_PATH") {
            if !path.trim().is_empty() {
                self.storage.state_path = PathBuf::from(path);
            }
        }
        if let Ok(seed) = env::var("PLAYBACK_SEED") {
            if let Ok(value) = seed.trim().parse::<u64>() {
                self.seed = Some(value);
            }
        }
        if let Ok(flag) = env::var("PLAYBACK_NO_DELAY") {
            if matches!(flag.trim().to_lowercase().as_str(), "1" | "true" | "yes") {
                self.latency.enabled = false;
            }
        }
        if let Ok(delay) = env::var("PLAYBACK_REACTION_DELAY_MS") {
            if let Ok(value) = delay.parse::<u64>() {
                self.latency.reaction_ms = value;
            }
        }
        if let Ok(delay) = env::var("PLAYBACK_VARIATION_DELAY_MS") {
            if let Ok(value) = delay.parse::<u64>() {
                self.latency.variations_ms = value;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("PLAYBACK_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/playback.toml")))
}
