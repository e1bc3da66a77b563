//! Placer configuration loading.
//!
//! A YAML file given on the command line wins; otherwise settings come from
//! the environment (after `.env` has been loaded).

use std::path::Path;

use anyhow::{Context, Result};
use inset_layout::PlacerConfig;
use tracing::{debug, info};

/// Load the placer configuration from `path`, or from the environment when
/// no path is given.
pub fn load_placer_config(path: Option<&Path>) -> Result<PlacerConfig> {
    let config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: PlacerConfig = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML: {:?}", path))?;
            info!(path = %path.display(), "Loaded placer config");
            config
        }
        None => {
            debug!("No config file given, reading placer config from environment");
            PlacerConfig::from_env()
        }
    };

    config.validate().context("Invalid placer config")?;
    Ok(config)
}
