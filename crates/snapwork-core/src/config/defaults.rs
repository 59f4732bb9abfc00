//! Built-in capture policy values.

use crate::config::types::CaptureConfig;
use crate::window::CapturePolicy;

/// Shell and system window classes: taskbar, button-class owner windows and
/// the program manager (desktop) window.
pub const DEFAULT_IGNORED_CLASSES: [&str; 3] = ["Shell_TrayWnd", "Button", "Progman"];

/// Device namespace prefix used by Win32 display device names (`\\.\DISPLAY1`).
pub const DEFAULT_MONITOR_PREFIXES: [&str; 1] = [r"\\.\"];

pub const DEFAULT_UNKNOWN_MONITOR: &str = "DISPLAY_UNKNOWN";

impl Default for CapturePolicy {
    fn default() -> Self {
        Self {
            ignored_classes: DEFAULT_IGNORED_CLASSES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            monitor_prefixes: DEFAULT_MONITOR_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            unknown_monitor: DEFAULT_UNKNOWN_MONITOR.to_string(),
        }
    }
}

impl CaptureConfig {
    /// Resolve the configured values against the built-in defaults.
    pub fn policy(&self) -> CapturePolicy {
        let defaults = CapturePolicy::default();
        CapturePolicy {
            ignored_classes: self
                .ignored_classes
                .clone()
                .unwrap_or(defaults.ignored_classes),
            monitor_prefixes: self
                .monitor_prefixes
                .clone()
                .unwrap_or(defaults.monitor_prefixes),
            unknown_monitor: self
                .unknown_monitor
                .clone()
                .unwrap_or(defaults.unknown_monitor),
        }
    }
}
