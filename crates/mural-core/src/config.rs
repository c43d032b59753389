//! Engine configuration.

use crate::rough::RoughOptions;
use crate::shapes::FontSpec;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Hit-test tolerances in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitTolerances {
    /// Per-axis distance for corner and endpoint handles.
    pub handle: f64,
    /// Maximum detour for a point to count as on a line.
    pub segment: f64,
    /// Maximum detour for a point to count as on a pencil stroke.
    pub pencil: f64,
}

impl Default for HitTolerances {
    fn default() -> Self {
        Self {
            handle: 5.0,
            segment: 1.0,
            pencil: 5.0,
        }
    }
}

/// Text placement settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub font: FontSpec,
    /// Height of a committed text box.
    pub line_height: f64,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font: FontSpec::default(),
            line_height: 24.0,
        }
    }
}

/// Engine configuration. Missing fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub hit: HitTolerances,
    pub text: TextConfig,
    pub rough: RoughOptions,
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert!((config.hit.handle - 5.0).abs() < f64::EPSILON);
        assert!((config.hit.segment - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.text.font.family, "Nunito");
        assert!((config.text.line_height - 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json_str(r#"{"hit": {"handle": 8.0}}"#).unwrap();
        assert!((config.hit.handle - 8.0).abs() < f64::EPSILON);
        assert!((config.hit.pencil - 5.0).abs() < f64::EPSILON);
        assert_eq!(config.rough, RoughOptions::default());
    }

    #[test]
    fn test_invalid_json() {
        let result = EngineConfig::from_json_str("{hit: 1}");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"text": {{"line_height": 30.0}}}}"#).unwrap();
        let config = EngineConfig::from_json_file(file.path()).unwrap();
        assert!((config.text.line_height - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = EngineConfig::from_json_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
