use crate::desktop::{DesktopError, SelectionError};
use crate::errors::SnapworkError;
use crate::window::WindowError;
use crate::workspace::{Violation, WorkspaceError};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("No windows were captured.")]
    NoWindows,

    #[error("{source}")]
    Selection {
        #[from]
        source: SelectionError,
    },

    #[error("{source}")]
    Desktop {
        #[from]
        source: DesktopError,
    },

    #[error("Window enumeration failed: {source}")]
    Window {
        #[from]
        source: WindowError,
    },

    #[error("Captured workspace is invalid: {}", join_violations(.violations))]
    InvalidWorkspace { violations: Vec<Violation> },

    #[error("{source}")]
    Workspace {
        #[from]
        source: WorkspaceError,
    },
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl ExportError {
    /// The selector problem, if this export failed on `--desktop`.
    pub fn selection_error(&self) -> Option<&SelectionError> {
        match self {
            ExportError::Selection { source } => Some(source),
            _ => None,
        }
    }

    /// The platform capability failure, if the desktop resolver was
    /// unavailable or failed mid-enumeration.
    pub fn platform_error(&self) -> Option<&DesktopError> {
        match self {
            ExportError::Desktop { source } => Some(source),
            ExportError::Window {
                source: WindowError::Desktop(source),
            } => Some(source),
            _ => None,
        }
    }
}

impl SnapworkError for ExportError {
    fn error_code(&self) -> &'static str {
        match self {
            ExportError::NoWindows => "EXPORT_NO_WINDOWS",
            ExportError::Selection { source } => source.error_code(),
            ExportError::Desktop { source } => source.error_code(),
            ExportError::Window { source } => source.error_code(),
            ExportError::InvalidWorkspace { .. } => "EXPORT_INVALID_WORKSPACE",
            ExportError::Workspace { source } => source.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ExportError::NoWindows | ExportError::Selection { .. }
        )
    }
}
