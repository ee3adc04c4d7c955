//! Command-line interface modules
//!
//! Contains the logic for the two CLI modes: resolve (default) and check.

pub mod check;
pub mod resolve;

use crate::config::ConfigLoader;
use std::path::PathBuf;

/// Determine the settings file path: CLI arg > PLUGINS_CONFIG > default location
pub(crate) fn settings_path(cli_config: Option<&str>) -> Option<PathBuf> {
    match cli_config {
        Some(config) => Some(PathBuf::from(config)),
        None => ConfigLoader::get_config_path(),
    }
}
