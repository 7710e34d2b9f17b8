// sizer-cli/src/commands/report.rs
//
// Implements the 'report' subcommand: load the catalog, resolve the size
// report for the requested resource, and render it in the requested format.

use crate::cli::ReportArgs;
use crate::error::CliResult;

use log::debug;
use sizer_core::{JsonCatalog, OutputFormat, SizeRequest, report_size};

/// Executes the report command, returning the payload to print on stdout.
pub fn run_report(args: ReportArgs) -> CliResult<String> {
    let catalog = JsonCatalog::load(&args.catalog)?;
    debug!(
        "catalog '{}' holds {} record(s)",
        args.catalog.display(),
        catalog.len()
    );

    let request = SizeRequest {
        id: args.id,
        format: OutputFormat::parse(&args.format),
    };

    let report = report_size(&catalog, &request)?;
    report.render(request.format)
}
