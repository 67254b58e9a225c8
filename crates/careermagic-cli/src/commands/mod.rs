use std::path::PathBuf;

use anyhow::Result;

use careermagic_core::config::{Config, ConfigPaths};

pub mod account;
pub mod bookmark;
pub mod careers;
pub mod config;
pub mod quiz;
pub mod report;

/// Resolve paths and load the effective config, falling back to defaults
/// when no config file has been written yet.
pub(crate) fn load_context(config_override: Option<PathBuf>) -> Result<(Config, ConfigPaths)> {
    let paths = ConfigPaths::resolve()?;
    let config_path = config_override.unwrap_or_else(|| paths.config_path.clone());
    let config = Config::load_or_default(&config_path)?;
    Ok((config, paths))
}
