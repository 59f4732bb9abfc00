use std::fmt;
use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{error, warn};

use snapwork_core::{ExportError, SnapworkConfig, events};

mod export;
mod print;
mod validate;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("validate", sub_matches)) => validate::handle_validate_command(sub_matches),
        Some(("print", sub_matches)) => print::handle_print_command(sub_matches),
        Some(("export", sub_matches)) => export::handle_export_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// A failure whose details were already printed by the command.
#[derive(Debug)]
pub struct AlreadyReported;

impl fmt::Display for AlreadyReported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "command failed")
    }
}

impl std::error::Error for AlreadyReported {}

/// Print a command failure to stderr and return the process exit code.
///
/// Exit codes: 3 for a bad `--desktop` selector, 4 when virtual desktops are
/// unavailable, 1 for everything else.
pub fn report_failure(error: &(dyn std::error::Error + 'static)) -> i32 {
    if error.is::<AlreadyReported>() {
        return 1;
    }

    events::log_app_error(error);

    if let Some(export_error) = error.downcast_ref::<ExportError>() {
        if let Some(selection_error) = export_error.selection_error() {
            eprintln!("Desktop selection error: {}", selection_error);
            return 3;
        }
        if let Some(platform_error) = export_error.platform_error() {
            eprintln!("Virtual desktop is unsupported: {}", platform_error);
            return 4;
        }
    }

    eprintln!("Error: {}", error);
    1
}

/// Workspace path from either the positional argument or `--file`.
fn workspace_path(matches: &ArgMatches) -> Result<PathBuf, Box<dyn std::error::Error>> {
    matches
        .get_one::<String>("path")
        .or_else(|| matches.get_one::<String>("file"))
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| "A workspace file path must be provided.".into())
}

fn load_config_with_warning() -> SnapworkConfig {
    match SnapworkConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.snapwork/config.toml and ./.snapwork/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            SnapworkConfig::default()
        }
    }
}
