use crate::desktop::DesktopError;
use crate::errors::SnapworkError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Failed to enumerate windows: {message}")]
    EnumerationFailed { message: String },

    #[error(transparent)]
    Desktop(#[from] DesktopError),
}

impl SnapworkError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::EnumerationFailed { .. } => "WINDOW_ENUMERATION_FAILED",
            WindowError::Desktop(e) => e.error_code(),
        }
    }
}
