//! Engine settings loaded from TOML.
//!
//! Defaults are embedded via `include_str!("default_settings.toml")`; hosts
//! may parse their own TOML with `Settings::from_toml` and hand the result
//! to the engine at construction.

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub repeat: RepeatSettings,
    pub candidates: CandidateSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepeatSettings {
    pub initial_delay_ms: u64,
    pub interval_ms: u64,
}

impl RepeatSettings {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateSettings {
    pub max: usize,
}

impl Settings {
    pub fn from_toml(toml_str: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(toml_str)?;
        // A zero interval would make the repeat schedule never advance.
        if settings.repeat.interval_ms == 0 {
            return Err(SettingsError::InvalidValue {
                field: "repeat.interval_ms",
                reason: "must be non-zero",
            });
        }
        if settings.candidates.max == 0 {
            return Err(SettingsError::InvalidValue {
                field: "candidates.max",
                reason: "must be non-zero",
            });
        }
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_toml(DEFAULT_SETTINGS_TOML).expect("embedded default settings must be valid")
    }
}
