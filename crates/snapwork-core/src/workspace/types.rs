use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Format version written into every captured workspace.
pub const FORMAT_VERSION: &str = "1.0";

/// A persisted window layout.
///
/// Built once per export or load and not mutated afterwards. Window order is
/// capture order and survives persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    #[serde(default)]
    pub version: String,

    #[serde(rename = "generatedUtc", alias = "generatedAt")]
    pub generated_at: DateTime<Utc>,

    #[serde(default)]
    pub windows: Vec<WindowSpec>,
}

impl Workspace {
    /// Create a workspace stamped with the current format version and time.
    pub fn new(windows: Vec<WindowSpec>) -> Self {
        Self {
            version: FORMAT_VERSION.to_string(),
            generated_at: Utc::now(),
            windows,
        }
    }
}

/// One persisted window record.
///
/// Scalar fields default when absent so that loading a sparse document
/// reports problems through validation instead of a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSpec {
    #[serde(default)]
    pub process_path: String,

    /// Reserved for restoring; never set by capture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub monitor_id: String,

    /// String form of the owning desktop's id; absent in workspaces captured
    /// without desktop awareness
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop_id: Option<String>,

    #[serde(default)]
    pub x: i32,

    #[serde(default)]
    pub y: i32,

    #[serde(default)]
    pub width: i32,

    #[serde(default)]
    pub height: i32,

    /// Reserved for restoring; never set by capture
    #[serde(default)]
    pub startup_delay_seconds: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_workspace_uses_current_version() {
        let before = Utc::now();
        let workspace = Workspace::new(vec![WindowSpec::default()]);

        assert_eq!(workspace.version, FORMAT_VERSION);
        assert!(workspace.generated_at >= before);
        assert_eq!(workspace.windows.len(), 1);
    }

    #[test]
    fn test_window_spec_field_names_are_camel_case() {
        let spec = WindowSpec {
            process_path: "app.exe".to_string(),
            title: "App".to_string(),
            monitor_id: "DISPLAY1".to_string(),
            desktop_id: Some("aa509086-5ca9-4c25-8f95-589d3c07b48a".to_string()),
            width: 10,
            height: 10,
            ..Default::default()
        };

        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["processPath"], "app.exe");
        assert_eq!(json["monitorId"], "DISPLAY1");
        assert_eq!(json["desktopId"], "aa509086-5ca9-4c25-8f95-589d3c07b48a");
        assert_eq!(json["startupDelaySeconds"], 0);
        assert!(json.get("arguments").is_none());
    }
}
