//! Configuration loading and merging logic.
//!
//! Loads configuration from files and merges configurations from different
//! sources (user config, project config). Later sources override earlier ones.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::types::{CaptureConfig, SnapworkConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

const CONFIG_DIR_NAME: &str = ".snapwork";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.snapwork/config.toml`)
/// 3. Project config (`./.snapwork/config.toml`)
///
/// # Errors
///
/// Returns an error if a file exists but cannot be parsed, or if validation
/// fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<SnapworkConfig, ConfigError> {
    let mut paths = Vec::new();
    if let Some(path) = user_config_path() {
        paths.push(path);
    }
    if let Some(path) = project_config_path() {
        paths.push(path);
    }

    load_from_paths(&paths)
}

/// Load and merge the given config files in order, then validate the result.
pub fn load_from_paths(paths: &[PathBuf]) -> Result<SnapworkConfig, ConfigError> {
    let mut config = SnapworkConfig::default();

    for path in paths {
        match load_config_file(path) {
            Ok(file_config) => config = merge_configs(config, file_config),
            Err(e) if e.is_not_found() => {
                debug!(
                    event = "core.config.file_not_found",
                    path = %path.display()
                );
            }
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;

    Ok(config)
}

fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn project_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<SnapworkConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
        path: path.display().to_string(),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configurations, with `override_config` taking precedence.
///
/// Optional values from the override replace base values only if present.
pub fn merge_configs(base: SnapworkConfig, override_config: SnapworkConfig) -> SnapworkConfig {
    SnapworkConfig {
        capture: CaptureConfig {
            ignored_classes: override_config
                .capture
                .ignored_classes
                .or(base.capture.ignored_classes),
            monitor_prefixes: override_config
                .capture
                .monitor_prefixes
                .or(base.capture.monitor_prefixes),
            unknown_monitor: override_config
                .capture
                .unknown_monitor
                .or(base.capture.unknown_monitor),
        },
    }
}
