use crate::errors::SnapworkError;

/// Platform capability failures. Fatal for the current invocation.
#[derive(Debug, thiserror::Error)]
pub enum DesktopError {
    #[error("{message}")]
    Unsupported { message: String },

    #[error("Failed to query virtual desktop identifier: {message}")]
    QueryFailed { message: String },
}

impl SnapworkError for DesktopError {
    fn error_code(&self) -> &'static str {
        match self {
            DesktopError::Unsupported { .. } => "DESKTOP_UNSUPPORTED",
            DesktopError::QueryFailed { .. } => "DESKTOP_QUERY_FAILED",
        }
    }
}

/// Invalid `--desktop` selectors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("No desktops were detected during export.")]
    NoDesktops,

    #[error("Desktop index '{selector}' is out of range. Valid indices: 0..{max_index}.")]
    IndexOutOfRange { selector: String, max_index: usize },

    #[error("Desktop selector '{selector}' is not a valid index or GUID.")]
    InvalidSelector { selector: String },

    #[error("Desktop '{selector}' was not found in the enumerated windows.")]
    DesktopNotFound { selector: String },
}

impl SnapworkError for SelectionError {
    fn error_code(&self) -> &'static str {
        match self {
            SelectionError::NoDesktops => "SELECTION_NO_DESKTOPS",
            SelectionError::IndexOutOfRange { .. } => "SELECTION_INDEX_OUT_OF_RANGE",
            SelectionError::InvalidSelector { .. } => "SELECTION_INVALID_SELECTOR",
            SelectionError::DesktopNotFound { .. } => "SELECTION_DESKTOP_NOT_FOUND",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
