use std::path::Path;

use tracing::{error, info};

use super::errors::ExportError;
use crate::desktop::{DesktopId, resolve_desktop_selection};
use crate::window::{EnumerateWindows, EnumeratedWindow};
use crate::workspace::{WindowSpec, Workspace, save_workspace, validate_workspace};

/// Captures the current window layout into a workspace file.
pub struct WorkspaceExporter {
    enumerator: Box<dyn EnumerateWindows>,
}

impl WorkspaceExporter {
    pub fn new(enumerator: Box<dyn EnumerateWindows>) -> Self {
        Self { enumerator }
    }

    /// Capture windows, optionally restricted to one desktop, and write them
    /// to `output_path`.
    ///
    /// Nothing is written (and no directory is created) unless the captured
    /// workspace passes validation.
    pub fn export(
        &self,
        output_path: &Path,
        desktop_selector: Option<&str>,
    ) -> Result<Workspace, ExportError> {
        info!(
            event = "core.export.export_started",
            output_path = %output_path.display(),
            desktop_selector = desktop_selector.unwrap_or("")
        );

        let candidates = self.enumerator.enumerate()?;
        if candidates.is_empty() {
            error!(event = "core.export.export_failed", reason = "no_windows");
            return Err(ExportError::NoWindows);
        }

        let selected = resolve_desktop_selection(&candidates, desktop_selector)?;
        let workspace = build_workspace(&candidates, selected);

        let violations = validate_workspace(&workspace);
        if !violations.is_empty() {
            error!(
                event = "core.export.export_failed",
                reason = "invalid_workspace",
                violation_count = violations.len()
            );
            return Err(ExportError::InvalidWorkspace { violations });
        }

        save_workspace(&workspace, output_path)?;

        info!(
            event = "core.export.export_completed",
            output_path = %output_path.display(),
            candidate_count = candidates.len(),
            window_count = workspace.windows.len()
        );

        Ok(workspace)
    }
}

/// Build a workspace from the candidates on `desktop`, or from all candidates
/// when no desktop is selected. Capture order is kept.
pub fn build_workspace(candidates: &[EnumeratedWindow], desktop: Option<DesktopId>) -> Workspace {
    let windows = candidates
        .iter()
        .filter(|w| desktop.is_none() || w.desktop_id == desktop)
        .map(to_window_spec)
        .collect();

    Workspace::new(windows)
}

pub fn to_window_spec(window: &EnumeratedWindow) -> WindowSpec {
    WindowSpec {
        process_path: window.process_path.clone(),
        arguments: None,
        title: window.title.clone(),
        monitor_id: window.monitor_id.clone(),
        desktop_id: window.desktop_id.map(|id| id.to_string()),
        x: window.bounds.left,
        y: window.bounds.top,
        width: window.bounds.width(),
        height: window.bounds.height(),
        startup_delay_seconds: 0,
    }
}
