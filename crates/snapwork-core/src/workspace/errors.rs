use crate::errors::SnapworkError;

#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("Failed to read workspace file '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write workspace file '{path}': {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Workspace document is empty")]
    EmptyDocument,

    #[error("Failed to parse {format} workspace: {message}")]
    ParseFailed {
        format: &'static str,
        message: String,
    },

    #[error("Failed to serialize workspace as {format}: {message}")]
    SerializeFailed {
        format: &'static str,
        message: String,
    },
}

impl SnapworkError for WorkspaceError {
    fn error_code(&self) -> &'static str {
        match self {
            WorkspaceError::ReadFailed { .. } => "WORKSPACE_READ_FAILED",
            WorkspaceError::WriteFailed { .. } => "WORKSPACE_WRITE_FAILED",
            WorkspaceError::EmptyDocument => "WORKSPACE_EMPTY_DOCUMENT",
            WorkspaceError::ParseFailed { .. } => "WORKSPACE_PARSE_FAILED",
            WorkspaceError::SerializeFailed { .. } => "WORKSPACE_SERIALIZE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            WorkspaceError::ReadFailed { .. }
                | WorkspaceError::EmptyDocument
                | WorkspaceError::ParseFailed { .. }
        )
    }
}
