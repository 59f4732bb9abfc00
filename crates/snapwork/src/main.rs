use snapwork_core::init_logging;

mod app;
mod commands;
mod table;

fn main() {
    let app = app::build_cli();
    let matches = match app.try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            // Usage errors exit 1; --help and --version exit 0
            let code = if e.use_stderr() { 1 } else { 0 };
            if let Err(print_err) = e.print() {
                eprintln!("Error: Failed to print usage: {}", print_err);
                std::process::exit(1);
            }
            std::process::exit(code);
        }
    };

    // Logs stay quiet unless -v is given
    let quiet = !matches.get_flag("verbose");
    init_logging(quiet);

    if let Err(e) = commands::run_command(&matches) {
        let code = commands::report_failure(e.as_ref());
        std::process::exit(code);
    }
}
