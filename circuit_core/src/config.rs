//! Configuration file support for Circo.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/circo/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub estimation: EstimationConfig,

    #[serde(default)]
    pub goal: GoalConfig,
}

/// Session playback configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Pre-roll countdown before the first step, in seconds
    #[serde(default = "default_preparation_secs")]
    pub preparation_secs: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            preparation_secs: default_preparation_secs(),
        }
    }
}

/// Summary estimation parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EstimationConfig {
    /// Calories attributed to one minute of active exercise
    #[serde(default = "default_kcal_per_active_minute")]
    pub kcal_per_active_minute: f64,
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            kcal_per_active_minute: default_kcal_per_active_minute(),
        }
    }
}

/// Weekly goal configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct GoalConfig {
    /// Planned training days, lowercase English names ("mon".."sun")
    #[serde(default)]
    pub planned_days: Vec<String>,
}

// Default value functions
fn default_preparation_secs() -> u32 {
    crate::session::DEFAULT_PREPARATION_SECS
}

fn default_kcal_per_active_minute() -> f64 {
    crate::library::DEFAULT_KCAL_PER_ACTIVE_MINUTE
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
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

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("circo").join("config.toml")
    }

    /// Planned goal days parsed into chrono weekdays; unknown names are
    /// rejected at load time by `validate`
    pub fn planned_weekdays(&self) -> Vec<chrono::Weekday> {
        self.goal
            .planned_days
            .iter()
            .filter_map(|d| parse_weekday(d))
            .collect()
    }

    fn validate(&self) -> Result<()> {
        if self.estimation.kcal_per_active_minute <= 0.0 {
            return Err(Error::Config(
                "kcal_per_active_minute must be positive".into(),
            ));
        }
        for day in &self.goal.planned_days {
            if parse_weekday(day).is_none() {
                return Err(Error::Config(format!("unknown weekday name: {}", day)));
            }
        }
        Ok(())
    }
}

/// Parse a lowercase weekday abbreviation or full name
pub fn parse_weekday(name: &str) -> Option<chrono::Weekday> {
    use chrono::Weekday::*;
    match name.to_lowercase().as_str() {
        "mon" | "monday" => Some(Mon),
        "tue" | "tuesday" => Some(Tue),
        "wed" | "wednesday" => Some(Wed),
        "thu" | "thursday" => Some(Thu),
        "fri" | "friday" => Some(Fri),
        "sat" | "saturday" => Some(Sat),
        "sun" | "sunday" => Some(Sun),
        _ => None,
    }
}
