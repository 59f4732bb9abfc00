use clap::{Arg, ArgAction, Command};

fn path_args() -> [Arg; 2] {
    [
        Arg::new("path")
            .help("Path to the workspace file (.yaml/.yml or .json)")
            .index(1)
            .required_unless_present("file")
            .conflicts_with("file"),
        Arg::new("file")
            .long("file")
            .short('f')
            .help("Path to the workspace file (alternative to the positional path)"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("snapwork")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Capture, validate and inspect window layout workspaces")
        .long_about("SnapWork captures the arrangement of visible application windows (position, size, owning process, monitor and virtual desktop) into a workspace file, and validates or prints existing workspace files.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("validate")
                .about("Validate a workspace file")
                .args(path_args()),
        )
        .subcommand(
            Command::new("print")
                .about("Print the windows stored in a workspace file")
                .args(path_args())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Capture the current window layout into a workspace file")
                .args(path_args())
                .arg(
                    Arg::new("desktop")
                        .long("desktop")
                        .short('d')
                        .value_name("INDEX|ID")
                        .help("Only capture windows on this virtual desktop (zero-based index or GUID)"),
                ),
        )
}
