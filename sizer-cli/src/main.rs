// sizer-cli/src/main.rs
//
// Entry point for the sizer command-line tool.
//
// Responsibilities include:
// - Parsing user-provided arguments (`Cli`, `Commands`, `ReportArgs`).
// - Setting up logging via env_logger (RUST_LOG).
// - Invoking the core size reporting logic (`sizer_core::report_size`).
// - Printing the success payload to stdout.
// - Mapping errors to stderr messages and distinct process exit codes.

mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use std::process;

fn main() {
    env_logger::init();

    // Parse the top-level arguments
    let cli = Cli::parse();

    // Match on the command provided
    let result = match cli.command {
        Commands::Report(args) => commands::report::run_report(args),
    };

    // The payload goes to stdout; errors go to stderr with the same
    // "Error: " prefix the original tag contract uses, plus an exit code
    // discriminating the rejection kind.
    match result {
        Ok(payload) => println!("{payload}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(error::exit_code(&e));
        }
    }
}
