//! Configuration type definitions.
//!
//! These types are deserialized from TOML config files. Every field is
//! optional so that a project config only needs to name what it overrides.

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapworkConfig {
    /// Window capture policy
    #[serde(default)]
    pub capture: CaptureConfig,
}

/// Policy tables used while filtering enumerated windows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Window class names that are never captured (case-insensitive)
    #[serde(default)]
    pub ignored_classes: Option<Vec<String>>,

    /// Prefixes stripped from raw monitor device names
    #[serde(default)]
    pub monitor_prefixes: Option<Vec<String>>,

    /// Monitor id used when the display cannot be determined
    #[serde(default)]
    pub unknown_monitor: Option<String>,
}
