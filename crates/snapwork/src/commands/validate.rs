use clap::ArgMatches;
use tracing::{info, warn};

use snapwork_core::workspace::{load_workspace, validate_workspace};

use super::{AlreadyReported, workspace_path};

pub(crate) fn handle_validate_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = workspace_path(matches)?;
    info!(event = "cli.validate_started", path = %path.display());

    let workspace = load_workspace(&path)?;
    let violations = validate_workspace(&workspace);

    if violations.is_empty() {
        println!("Workspace is valid.");
        info!(
            event = "cli.validate_completed",
            path = %path.display(),
            window_count = workspace.windows.len()
        );
        return Ok(());
    }

    eprintln!("Validation failed:");
    for violation in &violations {
        eprintln!(" - {}", violation);
    }

    warn!(
        event = "cli.validate_failed",
        path = %path.display(),
        violation_count = violations.len()
    );

    Err(AlreadyReported.into())
}
