//! Workspace file persistence
//!
//! YAML is the default document format; a `.json` extension selects JSON.
//! Writes go through a sibling temp file and a rename.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use super::errors::WorkspaceError;
use super::types::Workspace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick the document format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DocumentFormat::Yaml => "YAML",
            DocumentFormat::Json => "JSON",
        }
    }
}

pub fn serialize_workspace(
    workspace: &Workspace,
    format: DocumentFormat,
) -> Result<String, WorkspaceError> {
    let result = match format {
        DocumentFormat::Yaml => serde_yaml::to_string(workspace).map_err(|e| e.to_string()),
        DocumentFormat::Json => {
            serde_json::to_string_pretty(workspace).map_err(|e| e.to_string())
        }
    };

    result.map_err(|message| WorkspaceError::SerializeFailed {
        format: format.name(),
        message,
    })
}

/// Parse a workspace document. Unknown fields are ignored.
pub fn deserialize_workspace(
    content: &str,
    format: DocumentFormat,
) -> Result<Workspace, WorkspaceError> {
    if content.trim().is_empty() {
        return Err(WorkspaceError::EmptyDocument);
    }

    let result = match format {
        DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    };

    result.map_err(|message| WorkspaceError::ParseFailed {
        format: format.name(),
        message,
    })
}

pub fn load_workspace(path: &Path) -> Result<Workspace, WorkspaceError> {
    let content = fs::read_to_string(path).map_err(|e| WorkspaceError::ReadFailed {
        path: path.display().to_string(),
        source: e,
    })?;

    let format = DocumentFormat::from_path(path);
    let workspace = deserialize_workspace(&content, format).inspect_err(|e| {
        tracing::warn!(
            event = "core.workspace.load_failed",
            path = %path.display(),
            error = %e
        );
    })?;

    tracing::debug!(
        event = "core.workspace.load_completed",
        path = %path.display(),
        format = format.name(),
        window_count = workspace.windows.len()
    );

    Ok(workspace)
}

/// Write a workspace to `path`, creating the parent directory if needed.
pub fn save_workspace(workspace: &Workspace, path: &Path) -> Result<(), WorkspaceError> {
    let format = DocumentFormat::from_path(path);
    let document = serialize_workspace(workspace, format)?;

    let write_error = |source: std::io::Error| WorkspaceError::WriteFailed {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    let temp_file = temp_path_for(path);

    if let Err(e) = fs::write(&temp_file, &document) {
        cleanup_temp_file(&temp_file, &e);
        return Err(write_error(e));
    }

    if let Err(e) = fs::rename(&temp_file, path) {
        cleanup_temp_file(&temp_file, &e);
        return Err(write_error(e));
    }

    tracing::debug!(
        event = "core.workspace.save_completed",
        path = %path.display(),
        format = format.name(),
        window_count = workspace.windows.len()
    );

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut temp: OsString = path.as_os_str().to_owned();
    temp.push(".tmp");
    PathBuf::from(temp)
}

fn cleanup_temp_file(temp_file: &Path, original_error: &std::io::Error) {
    if temp_file.exists()
        && let Err(cleanup_err) = fs::remove_file(temp_file)
    {
        tracing::warn!(
            event = "core.workspace.temp_file_cleanup_failed",
            temp_file = %temp_file.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err
        );
    }
}
