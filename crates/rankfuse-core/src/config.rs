//! `RankFuse` Configuration Module
//!
//! Provides configuration file support via `rankfuse.toml`, environment
//! variables, and runtime overrides. The values are defaults for fusion
//! requests that leave a setting unspecified.
//!
//! # Priority (highest to lowest)
//!
//! 1. Runtime overrides (CLI flags, request fields)
//! 2. Environment variables (`RANKFUSE_<SECTION>__<KEY>`)
//! 3. Configuration file (`rankfuse.toml`)
//! 4. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::fusion::{
    FusionConfigBuilder, DEFAULT_MIN_SCORE, DEFAULT_RANK_WINDOW_SIZE, DEFAULT_WEIGHT,
};
use crate::normalizer::ScoreNormalizer;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "rankfuse.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "RANKFUSE_";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Configuration key that failed validation.
        key: String,
        /// Validation error message.
        message: String,
    },
}

/// Fusion defaults section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionDefaults {
    /// Number of documents kept after fusion.
    pub rank_window_size: usize,
    /// Minimum combined score kept after fusion.
    pub min_score: f32,
    /// Weight of a source that does not specify one.
    pub default_weight: f32,
    /// Normalizer of a source that does not specify one.
    pub default_normalizer: ScoreNormalizer,
}

impl Default for FusionDefaults {
    fn default() -> Self {
        Self {
            rank_window_size: DEFAULT_RANK_WINDOW_SIZE,
            min_score: DEFAULT_MIN_SCORE,
            default_weight: DEFAULT_WEIGHT,
            default_normalizer: ScoreNormalizer::Identity,
        }
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Main `RankFuse` configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RankFuseConfig {
    /// Fusion defaults.
    pub fusion: FusionDefaults,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl RankFuseConfig {
    /// Loads configuration from default sources.
    ///
    /// Priority: defaults < `rankfuse.toml` < environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(CONFIG_FILE_NAME)
    }

    /// Loads configuration from a specific file path.
    ///
    /// A missing file is not an error: defaults and environment apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Creates a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fusion.rank_window_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "fusion.rank_window_size".to_string(),
                message: "value must be > 0".to_string(),
            });
        }

        if !self.fusion.min_score.is_finite() || self.fusion.min_score < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "fusion.min_score".to_string(),
                message: format!(
                    "value {} must be finite and non-negative",
                    self.fusion.min_score
                ),
            });
        }

        if !self.fusion.default_weight.is_finite() || self.fusion.default_weight < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "fusion.default_weight".to_string(),
                message: format!(
                    "value {} must be finite and non-negative",
                    self.fusion.default_weight
                ),
            });
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "logging.level".to_string(),
                message: format!(
                    "value '{}' is invalid, expected one of: {:?}",
                    self.logging.level, valid_levels
                ),
            });
        }

        Ok(())
    }

    /// Returns a request builder preloaded with the window size and
    /// minimum score defaults.
    #[must_use]
    pub fn fusion_builder(&self) -> FusionConfigBuilder {
        FusionConfigBuilder::default()
            .rank_window_size(self.fusion.rank_window_size)
            .min_score(self.fusion.min_score)
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
