//! Strength tiers - length based password classification.

use secrecy::{ExposeSecret, SecretString};

use crate::config::ConfigError;

/// Default minimum length for the `Medium` tier.
pub const MEDIUM_MIN_LENGTH: usize = 10;

/// Default minimum length for the `Strong` tier.
pub const STRONG_MIN_LENGTH: usize = 20;

/// Strength tier shown by the three segment indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Strength {
    #[default]
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Number of indicator segments lit for this tier (1 to 3).
    pub fn segments_lit(self) -> usize {
        match self {
            Strength::Weak => 1,
            Strength::Medium => 2,
            Strength::Strong => 3,
        }
    }
}

/// Length boundaries between tiers. A boundary value belongs to the higher tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthThresholds {
    medium_min: usize,
    strong_min: usize,
}

impl Default for StrengthThresholds {
    fn default() -> Self {
        Self {
            medium_min: MEDIUM_MIN_LENGTH,
            strong_min: STRONG_MIN_LENGTH,
        }
    }
}

impl StrengthThresholds {
    /// Builds thresholds, requiring `0 < medium_min < strong_min`.
    pub fn new(medium_min: usize, strong_min: usize) -> Result<Self, ConfigError> {
        if medium_min == 0 {
            return Err(ConfigError::ZeroMediumThreshold);
        }
        if strong_min <= medium_min {
            return Err(ConfigError::UnorderedThresholds {
                medium_min,
                strong_min,
            });
        }
        Ok(Self {
            medium_min,
            strong_min,
        })
    }

    pub fn medium_min(&self) -> usize {
        self.medium_min
    }

    pub fn strong_min(&self) -> usize {
        self.strong_min
    }

    /// Classifies a text length.
    pub fn classify(&self, len: usize) -> Strength {
        if len >= self.strong_min {
            Strength::Strong
        } else if len >= self.medium_min {
            Strength::Medium
        } else {
            Strength::Weak
        }
    }
}

/// Classifies a text length with the default thresholds.
pub fn classify(len: usize) -> Strength {
    StrengthThresholds::default().classify(len)
}

/// Length of a password in characters.
pub fn password_len(password: &SecretString) -> usize {
    password.expose_secret().chars().count()
}

/// Classifies a password with the default thresholds.
pub fn classify_password(password: &SecretString) -> Strength {
    classify(password_len(password))
}
