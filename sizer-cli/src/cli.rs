// sizer-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Sizer: Resource file size reporting tool",
    long_about = "Reports the size of the file referenced by a resource catalog record, \
                  as a raw byte count, a human-readable string, or both as JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reports the size of the file referenced by a resource record
    Report(ReportArgs),
}

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// ID of the resource record to look up (0 counts as unspecified)
    #[arg(required = true, value_name = "ID")]
    pub id: u64,

    /// Output format: 'raw', 'formatted', or 'both'.
    /// Unrecognized values fall back to 'formatted'.
    #[arg(short, long, value_name = "FORMAT", default_value = "formatted")]
    pub format: String,

    /// Path to the resource catalog JSON file.
    /// Can also be set via the SIZER_CATALOG environment variable.
    #[arg(short, long, value_name = "CATALOG_FILE", env = "SIZER_CATALOG")]
    pub catalog: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_basic_args() {
        let args = vec![
            "sizer", // Program name
            "report",
            "123",
            "--catalog",
            "resources.json",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Report(report_args) => {
                assert_eq!(report_args.id, 123);
                assert_eq!(report_args.format, "formatted"); // Default
                assert_eq!(report_args.catalog, PathBuf::from("resources.json"));
            }
        }
    }

    #[test]
    fn test_parse_report_with_format() {
        let args = vec![
            "sizer",
            "report",
            "7",
            "--format",
            "both",
            "--catalog",
            "/etc/sizer/resources.json",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Report(report_args) => {
                assert_eq!(report_args.id, 7);
                assert_eq!(report_args.format, "both");
                assert_eq!(
                    report_args.catalog,
                    PathBuf::from("/etc/sizer/resources.json")
                );
            }
        }
    }

    #[test]
    fn test_parse_report_rejects_non_numeric_id() {
        let args = vec!["sizer", "report", "abc", "--catalog", "resources.json"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
