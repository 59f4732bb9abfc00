//! # Configuration System
//!
//! Hierarchical TOML configuration for SnapWork.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.snapwork/config.toml` (global user preferences)
//! 3. **Project config** - `./.snapwork/config.toml` (directory-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.snapwork/config.toml
//! [capture]
//! ignored_classes = ["Shell_TrayWnd", "Button", "Progman", "NotifyIconOverflowWindow"]
//! monitor_prefixes = ['\\.\']
//! unknown_monitor = "DISPLAY_UNKNOWN"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use snapwork_core::config::SnapworkConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SnapworkConfig::load_hierarchy()?;
//!     let policy = config.capture.policy();
//!     println!("{} ignored classes", policy.ignored_classes.len());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{CaptureConfig, SnapworkConfig};
pub use validation::validate_config;

impl SnapworkConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }
}
