//! Configuration file support for MindCare.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/mindcare/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tracker: TrackerConfig,

    #[serde(default)]
    pub recommendation: RecommendationConfig,

    #[serde(default)]
    pub resources: ResourcesConfig,
}

/// Defaults for the entry form and dashboard
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_energy")]
    pub default_energy: u8,

    #[serde(default = "default_sleep")]
    pub default_sleep: f64,

    #[serde(default = "default_stress")]
    pub default_stress: u8,

    /// Rows shown in the dashboard's recent-entries table
    #[serde(default = "default_recent_entries")]
    pub recent_entries: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            default_energy: default_energy(),
            default_sleep: default_sleep(),
            default_stress: default_stress(),
            recent_entries: default_recent_entries(),
        }
    }
}

/// Thresholds used when picking a recommendation block
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Mean stress above this reads as a negative period
    #[serde(default = "default_stress_threshold")]
    pub stress_threshold: f64,

    /// Mean stress assumed when no entry records stress
    #[serde(default = "default_fallback_stress")]
    pub fallback_stress: f64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            stress_threshold: default_stress_threshold(),
            fallback_stress: default_fallback_stress(),
        }
    }
}

/// A technique in a user-defined resource category
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CustomTechnique {
    pub name: String,
    pub description: Option<String>,
}

/// User-defined resource category
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CustomCategory {
    pub name: String,
    #[serde(default)]
    pub techniques: Vec<CustomTechnique>,
}

/// Resource library configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ResourcesConfig {
    #[serde(default)]
    pub custom: Vec<CustomCategory>,
}

// Default value functions
fn default_energy() -> u8 {
    5
}

fn default_sleep() -> f64 {
    7.0
}

fn default_stress() -> u8 {
    5
}

fn default_recent_entries() -> usize {
    3
}

fn default_stress_threshold() -> f64 {
    7.0
}

fn default_fallback_stress() -> f64 {
    5.0
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            Some(config_path) => {
                tracing::info!(
                    "No config file found at {:?}, using defaults",
                    config_path
                );
                Ok(Self::default())
            }
            None => {
                tracing::info!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("mindcare").join("config.toml"))
    }

    /// Check that the form defaults lie inside the entry bounds
    pub fn validate(&self) -> Result<()> {
        let defaults_entry = crate::MoodEntry::new(
            chrono::NaiveDate::MIN,
            crate::Mood::Neutral,
            self.tracker.default_energy,
            self.tracker.default_sleep,
        )
        .with_stress(self.tracker.default_stress);

        defaults_entry
            .check_bounds()
            .map_err(|e| Error::Config(format!("Invalid tracker defaults: {}", e)))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
