//! Field configuration
//!
//! Handles the title text and the strength thresholds, with optional
//! overrides from environment variables.

use std::env::VarError;

use thiserror::Error;

use crate::strength::StrengthThresholds;

/// Environment variable overriding the title label.
pub const TITLE_ENV: &str = "PWD_FIELD_TITLE";
/// Environment variable overriding the `Medium` threshold.
pub const MEDIUM_MIN_ENV: &str = "PWD_FIELD_MEDIUM_MIN";
/// Environment variable overriding the `Strong` threshold.
pub const STRONG_MIN_ENV: &str = "PWD_FIELD_STRONG_MIN";

pub const DEFAULT_TITLE: &str = "ENTER PASSWORD";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} is not a length")]
    InvalidNumber { var: &'static str, value: String },
    #[error("Value of {var} is not valid unicode")]
    NotUnicode { var: &'static str },
    #[error("Medium threshold must be greater than zero")]
    ZeroMediumThreshold,
    #[error("Strong threshold ({strong_min}) must be greater than medium threshold ({medium_min})")]
    UnorderedThresholds { medium_min: usize, strong_min: usize },
}

/// Configuration shared by a field's controller and its view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig {
    pub title: String,
    pub thresholds: StrengthThresholds,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            thresholds: StrengthThresholds::default(),
        }
    }
}

impl FieldConfig {
    /// Loads the configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_FIELD_TITLE`: title label (default `ENTER PASSWORD`)
    /// - `PWD_FIELD_MEDIUM_MIN`: minimum length for `Medium` (default 10)
    /// - `PWD_FIELD_STRONG_MIN`: minimum length for `Strong` (default 20)
    ///
    /// Unset variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - A variable is set but is not valid unicode
    /// - A threshold is not a non-negative integer
    /// - The thresholds are zero or not strictly increasing
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = StrengthThresholds::default();
        let title = read_var(TITLE_ENV)?.unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let medium_min = read_length(MEDIUM_MIN_ENV)?.unwrap_or(defaults.medium_min());
        let strong_min = read_length(STRONG_MIN_ENV)?.unwrap_or(defaults.strong_min());

        let thresholds = match StrengthThresholds::new(medium_min, strong_min) {
            Ok(t) => t,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Field configuration FAILED: {}", e);
                return Err(e);
            }
        };

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Field configuration loaded: medium >= {}, strong >= {}",
            medium_min,
            strong_min
        );

        Ok(Self { title, thresholds })
    }
}

fn read_var(var: &'static str) -> Result<Option<String>, ConfigError> {
    match std::env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var }),
    }
}

fn read_length(var: &'static str) -> Result<Option<usize>, ConfigError> {
    match read_var(var)? {
        Some(value) => value
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
        None => Ok(None),
    }
}
