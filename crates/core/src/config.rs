//! Calculator configuration files
//!
//! A config is the six wall parameters plus the sweep, stored as JSON. Any
//! field may be omitted and falls back to the reference defaults, so
//! `{"parameters": {"elapsed": 60.0}}` is a complete file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core_types::{MaterialPreset, TemperatureSweep, ThermalParameters};

/// Everything needed to run one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Material preset applied before `parameters` overrides, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<MaterialPreset>,
    /// Wall parameters
    pub parameters: ThermalParameters,
    /// External temperature sweep
    pub sweep: TemperatureSweep,
}

impl CalculatorConfig {
    /// Parse a config from a JSON string
    ///
    /// # Errors
    /// Returns `ConfigError::ParseFailed` if the JSON is malformed or mistyped
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(contents).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Load a config from file
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents =
            fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed(e.to_string()))?;
        Self::from_json_str(&contents)
    }

    /// Save the config to file as pretty JSON
    ///
    /// # Errors
    /// Returns error if file cannot be written or config cannot be serialized
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeFailed(e.to_string()))?;

        fs::write(path, contents).map_err(|e| ConfigError::SaveFailed(e.to_string()))?;

        Ok(())
    }

    /// Parameters with the preset's material properties applied.
    ///
    /// A preset replaces conductivity, density and specific heat; the other
    /// fields always come from `parameters`.
    pub fn resolved_parameters(&self) -> ThermalParameters {
        match self.preset {
            Some(preset) => preset.apply(self.parameters),
            None => self.parameters,
        }
    }
}

/// Look up a preset by name
///
/// # Errors
/// Returns `ConfigError::UnknownPreset` when the name matches no preset
pub fn parse_preset(name: &str) -> Result<MaterialPreset, ConfigError> {
    name.parse().map_err(ConfigError::UnknownPreset)
}

/// Errors that can occur loading or saving configs
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to load file
    LoadFailed(String),
    /// Failed to parse file contents
    ParseFailed(String),
    /// Failed to serialize config
    SerializeFailed(String),
    /// Failed to save file
    SaveFailed(String),
    /// No preset with the given name
    UnknownPreset(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadFailed(msg) => write!(f, "Failed to load config: {msg}"),
            ConfigError::ParseFailed(msg) => write!(f, "Failed to parse config: {msg}"),
            ConfigError::SerializeFailed(msg) => write!(f, "Failed to serialize config: {msg}"),
            ConfigError::SaveFailed(msg) => write!(f, "Failed to save config: {msg}"),
            ConfigError::UnknownPreset(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
