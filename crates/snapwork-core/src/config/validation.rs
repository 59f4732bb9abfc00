//! Configuration validation logic.

use crate::config::types::SnapworkConfig;
use crate::errors::ConfigError;

/// Validate a SnapworkConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - `unknown_monitor`, if set, must not be blank
/// - Ignored class names, if set, must not be blank
/// - Monitor prefixes, if set, must not be empty strings
pub fn validate_config(config: &SnapworkConfig) -> Result<(), ConfigError> {
    let capture = &config.capture;

    if let Some(ref sentinel) = capture.unknown_monitor
        && sentinel.trim().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "capture.unknown_monitor cannot be blank".to_string(),
        });
    }

    if let Some(ref classes) = capture.ignored_classes
        && classes.iter().any(|c| c.trim().is_empty())
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "capture.ignored_classes cannot contain blank class names".to_string(),
        });
    }

    if let Some(ref prefixes) = capture.monitor_prefixes
        && prefixes.iter().any(|p| p.is_empty())
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "capture.monitor_prefixes cannot contain empty prefixes".to_string(),
        });
    }

    Ok(())
}
