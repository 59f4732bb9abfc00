use chrono::SecondsFormat;
use clap::ArgMatches;
use tracing::info;

use snapwork_core::workspace::load_workspace;

use super::workspace_path;
use crate::table::TableFormatter;

pub(crate) fn handle_print_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let path = workspace_path(matches)?;
    let json_output = matches.get_flag("json");

    info!(event = "cli.print_started", path = %path.display(), json_output = json_output);

    let workspace = load_workspace(&path)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&workspace)?);
    } else {
        println!("Version: {}", workspace.version);
        println!(
            "GeneratedUtc: {}",
            workspace
                .generated_at
                .to_rfc3339_opts(SecondsFormat::AutoSi, true)
        );
        println!("Windows ({}):", workspace.windows.len());

        if !workspace.windows.is_empty() {
            TableFormatter::new(&workspace.windows).print_table(&workspace.windows);
        }
    }

    info!(
        event = "cli.print_completed",
        path = %path.display(),
        window_count = workspace.windows.len()
    );

    Ok(())
}
