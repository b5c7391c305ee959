//! Entry point for the `hookkit` CLI.
//!
//! Parses arguments, sets up logging, loads configuration, dispatches to the
//! command handler, and maps errors to exit codes.

use hookkit::cli::{self, Cli};
use hookkit::config::Config;
use hookkit::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            let validate = cli::subcommand_name(std::env::args_os()).as_deref() == Some("validate");
            return ExitCode::from(commands::report_parse_error(err, validate) as u8);
        }
    };
    logging::init(cli.verbose);

    let result = match Config::load_or_default(cli.config.as_deref()) {
        Ok(config) => commands::dispatch(cli.command, &config),
        Err(err) => {
            // Pipelines still get a JSON object on stdout
            let mut stdout = std::io::stdout().lock();
            if let Err(print_err) = commands::report_startup_failure(&cli.command, &err, &mut stdout)
            {
                eprintln!("Error: {}", print_err);
            }
            Err(err)
        }
    };

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
