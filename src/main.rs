// Recurring Calendar
// Main entry point

mod cli;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Recurring Calendar");

    let args = cli::Cli::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", cli::report_error(&err));
            ExitCode::FAILURE
        }
    }
}
