//! Engine Configuration
//!
//! Configuration types for the calculator engine and its display.

use crate::core::{AngleMode, CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Default number of decimal places kept after a scientific function
pub const DEFAULT_PRECISION: u32 = 9;

/// Largest supported precision; an f64 carries at most 15 exact decimals
pub const MAX_PRECISION: u32 = 15;

/// Default thousands separator for the integer part
pub const DEFAULT_GROUP_SEPARATOR: char = ',';

/// Configuration for the calculator engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Decimal places kept when rounding scientific function results
    pub precision: u32,
    /// Angle mode the engine starts in
    pub angle_mode: AngleMode,
    /// Thousands separator used by the display formatter
    pub group_separator: char,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            angle_mode: AngleMode::Degrees,
            group_separator: DEFAULT_GROUP_SEPARATOR,
        }
    }
}

impl EngineConfig {
    /// Create a new builder
    #[must_use]
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Decodes a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every setting is in range
    pub fn validate(&self) -> CalcResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(CalcError::PrecisionOutOfRange {
                precision: self.precision,
                max: MAX_PRECISION,
            });
        }
        Ok(())
    }

    /// Encodes the configuration as JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Builder for `EngineConfig`
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Set rounding precision for scientific results, clamped to `MAX_PRECISION`
    #[must_use]
    pub fn precision(mut self, decimals: u32) -> Self {
        self.config.precision = decimals.min(MAX_PRECISION);
        self
    }

    /// Set the initial angle mode
    #[must_use]
    pub fn angle_mode(mut self, mode: AngleMode) -> Self {
        self.config.angle_mode = mode;
        self
    }

    /// Set the thousands separator
    #[must_use]
    pub fn group_separator(mut self, separator: char) -> Self {
        self.config.group_separator = separator;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> EngineConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalcError;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.precision, 9);
        assert_eq!(config.angle_mode, AngleMode::Degrees);
        assert_eq!(config.group_separator, ',');
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::builder()
            .precision(4)
            .angle_mode(AngleMode::Radians)
            .group_separator('.')
            .build();
        assert_eq!(config.precision, 4);
        assert_eq!(config.angle_mode, AngleMode::Radians);
        assert_eq!(config.group_separator, '.');
    }

    #[test]
    fn test_from_json_partial() {
        let config = EngineConfig::from_json(r#"{"angle_mode":"Radians"}"#).unwrap();
        assert_eq!(config.angle_mode, AngleMode::Radians);
        assert_eq!(config.precision, DEFAULT_PRECISION);
    }

    #[test]
    fn test_from_json_empty_object() {
        assert_eq!(EngineConfig::from_json("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_from_json_invalid() {
        let result = EngineConfig::from_json(r#"{"precision":"nine"}"#);
        assert!(matches!(result, Err(CalcError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_clamps_precision() {
        let config = EngineConfig::builder().precision(400).build();
        assert_eq!(config.precision, MAX_PRECISION);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_rejects_large_precision() {
        let result = EngineConfig::from_json(r#"{"precision":400}"#);
        assert!(matches!(
            result,
            Err(CalcError::PrecisionOutOfRange { precision: 400, max: MAX_PRECISION })
        ));
    }

    #[test]
    fn test_from_json_accepts_max_precision() {
        let config = EngineConfig::from_json(r#"{"precision":15}"#).unwrap();
        assert_eq!(config.precision, MAX_PRECISION);
    }

    #[test]
    fn test_json_round_trip() {
        let config = EngineConfig::builder().group_separator(' ').build();
        let json = config.to_json().unwrap();
        assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
    }
}
