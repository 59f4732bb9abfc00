use clap::ArgMatches;
use tracing::info;

use snapwork_core::{ExportError, WorkspaceExporter, platform};

use super::{load_config_with_warning, workspace_path};

pub(crate) fn handle_export_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = workspace_path(matches)?;
    let desktop_selector = matches
        .get_one::<String>("desktop")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty());

    info!(
        event = "cli.export_started",
        path = %path.display(),
        desktop_selector = desktop_selector.unwrap_or("")
    );

    let config = load_config_with_warning();
    let enumerator =
        platform::native_enumerator(config.capture.policy()).map_err(ExportError::from)?;
    let exporter = WorkspaceExporter::new(Box::new(enumerator));

    let workspace = exporter.export(&path, desktop_selector)?;

    println!(
        "Exported {} window(s) to '{}'.",
        workspace.windows.len(),
        path.display()
    );
    if let Some(selector) = desktop_selector {
        println!("Desktop selector: {}", selector);
    }

    info!(
        event = "cli.export_completed",
        path = %path.display(),
        window_count = workspace.windows.len()
    );

    Ok(())
}
