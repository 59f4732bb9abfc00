//! Workspace validation
//!
//! Structural and value checks shared by export (before writing) and the
//! `validate` command (after loading). Pure: no I/O.

use std::fmt;

use super::types::{WindowSpec, Workspace};

/// A single problem found in a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The workspace has no windows at all
    NoWindows,
    /// A required text field is empty or whitespace
    MissingField { index: usize, field: &'static str },
    /// A dimension is zero or negative
    NonPositiveDimension {
        index: usize,
        field: &'static str,
        value: i32,
    },
}

impl Violation {
    /// Position of the offending window, if the violation is about one window.
    pub fn window_index(&self) -> Option<usize> {
        match self {
            Violation::NoWindows => None,
            Violation::MissingField { index, .. }
            | Violation::NonPositiveDimension { index, .. } => Some(*index),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NoWindows => write!(f, "Workspace must contain at least one window."),
            Violation::MissingField { index, field } => {
                write!(f, "Window[{}].{} must be specified.", index, field)
            }
            Violation::NonPositiveDimension { index, field, .. } => {
                write!(f, "Window[{}].{} must be greater than zero.", index, field)
            }
        }
    }
}

/// Validate a workspace, collecting every violation.
///
/// An empty result means the workspace is valid. An empty window list yields
/// exactly one [`Violation::NoWindows`]; otherwise every window is checked and
/// all failures are reported.
pub fn validate_workspace(workspace: &Workspace) -> Vec<Violation> {
    if workspace.windows.is_empty() {
        return vec![Violation::NoWindows];
    }

    workspace
        .windows
        .iter()
        .enumerate()
        .flat_map(|(index, window)| validate_window(index, window))
        .collect()
}

fn validate_window(index: usize, window: &WindowSpec) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (field, value) in [
        ("processPath", &window.process_path),
        ("title", &window.title),
        ("monitorId", &window.monitor_id),
    ] {
        if value.trim().is_empty() {
            violations.push(Violation::MissingField { index, field });
        }
    }

    for (field, value) in [("width", window.width), ("height", window.height)] {
        if value <= 0 {
            violations.push(Violation::NonPositiveDimension {
                index,
                field,
                value,
            });
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;

    fn valid_window() -> WindowSpec {
        WindowSpec {
            process_path: r"C:\Program Files\App\app.exe".to_string(),
            title: "App".to_string(),
            monitor_id: "DISPLAY1".to_string(),
            x: 100,
            y: 100,
            width: 1280,
            height: 720,
            ..Default::default()
        }
    }

    fn workspace(windows: Vec<WindowSpec>) -> Workspace {
        Workspace {
            version: "1.0".to_string(),
            generated_at: Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap(),
            windows,
        }
    }

    #[test]
    fn test_valid_workspace() {
        assert!(validate_workspace(&workspace(vec![valid_window()])).is_empty());
    }

    #[test]
    fn test_empty_workspace_single_violation() {
        let violations = validate_workspace(&workspace(vec![]));
        assert_eq!(violations, vec![Violation::NoWindows]);
        assert!(violations[0].to_string().contains("at least one window"));
    }

    #[test]
    fn test_zero_height_names_height_field() {
        let window = WindowSpec {
            process_path: "app.exe".to_string(),
            title: "Main Window".to_string(),
            monitor_id: "DISPLAY1".to_string(),
            width: 800,
            height: 0,
            ..Default::default()
        };

        let violations = validate_workspace(&workspace(vec![window]));

        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0],
            Violation::NonPositiveDimension {
                index: 0,
                field: "height",
                value: 0
            }
        );
        assert_eq!(
            violations[0].to_string(),
            "Window[0].height must be greater than zero."
        );
    }

    #[test]
    fn test_collects_all_violations_across_windows() {
        let blank = WindowSpec {
            process_path: "  ".to_string(),
            title: String::new(),
            monitor_id: "\t".to_string(),
            width: -5,
            height: 0,
            ..Default::default()
        };

        let violations = validate_workspace(&workspace(vec![valid_window(), blank.clone(), blank]));

        assert_eq!(violations.len(), 10);
        assert!(violations.iter().all(|v| v.window_index() != Some(0)));
        let messages: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
        assert!(messages.contains(&"Window[1].processPath must be specified.".to_string()));
        assert!(messages.contains(&"Window[1].title must be specified.".to_string()));
        assert!(messages.contains(&"Window[1].monitorId must be specified.".to_string()));
        assert!(messages.contains(&"Window[2].width must be greater than zero.".to_string()));
    }

    #[test]
    fn test_validation_is_monotonic() {
        let mut windows = vec![valid_window()];
        let baseline = validate_workspace(&workspace(windows.clone())).len();

        windows.push(WindowSpec {
            title: String::new(),
            ..valid_window()
        });
        let with_bad_window = validate_workspace(&workspace(windows.clone())).len();
        assert!(with_bad_window > baseline);

        windows.push(WindowSpec {
            width: 0,
            height: 0,
            ..valid_window()
        });
        let with_two_bad_windows = validate_workspace(&workspace(windows)).len();
        assert!(with_two_bad_windows > with_bad_window);

        assert_eq!(
            validate_workspace(&workspace(vec![])),
            vec![Violation::NoWindows]
        );
    }
}
