//! Configuration for the placement search.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// What to do when every candidate overlaps a reserved area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Give up and report no placement.
    #[default]
    Avoid,
    /// Search again ignoring reserved areas.
    AllowFallback,
}

impl FromStr for OverlapPolicy {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "avoid" => Ok(Self::Avoid),
            "allow_fallback" | "fallback" | "allow" => Ok(Self::AllowFallback),
            other => Err(LayoutError::InvalidConfig(format!(
                "unknown overlap policy '{}'",
                other
            ))),
        }
    }
}

/// Configuration for the placement search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacerConfig {
    /// Candidate left edges sampled on each side of the target.
    pub x_samples: usize,

    /// Candidate bottom edges sampled from the top of the plot down.
    pub y_samples: usize,

    /// Behaviour when no candidate avoids the reserved areas.
    pub overlap_policy: OverlapPolicy,
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self {
            x_samples: 10,
            y_samples: 10,
            overlap_policy: OverlapPolicy::Avoid,
        }
    }
}

impl PlacerConfig {
    /// Load configuration from environment variables.
    ///
    /// Unparseable values are ignored and the default kept.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("INSET_X_SAMPLES") {
            if let Ok(n) = val.parse() {
                config.x_samples = n;
            }
        }

        if let Ok(val) = std::env::var("INSET_Y_SAMPLES") {
            if let Ok(n) = val.parse() {
                config.y_samples = n;
            }
        }

        if let Ok(val) = std::env::var("INSET_OVERLAP_POLICY") {
            if let Ok(policy) = val.parse() {
                config.overlap_policy = policy;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.x_samples < 2 {
            return Err(LayoutError::InvalidConfig("x_samples must be >= 2".to_string()));
        }

        if self.y_samples < 2 {
            return Err(LayoutError::InvalidConfig("y_samples must be >= 2".to_string()));
        }

        Ok(())
    }
}
