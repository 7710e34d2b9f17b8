//! Core library for reporting the size of files referenced by resource records.
//!
//! This crate resolves an integer resource ID to a filesystem path through a
//! pluggable record store, stats the referenced file, and renders the size as
//! a raw byte count, a human-readable string, or both as compact JSON.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use sizer_core::{JsonCatalog, OutputFormat, SizeRequest, report_size};
//! use std::path::Path;
//!
//! let catalog = JsonCatalog::load(Path::new("/path/to/resources.json")).unwrap();
//!
//! let request = SizeRequest { id: 123, format: OutputFormat::Both };
//! let report = report_size(&catalog, &request).unwrap();
//! println!("{}", report.render(request.format).unwrap());
//! ```

pub mod catalog;
pub mod error;
pub mod format;
pub mod report;

// Re-exports for public API
pub use catalog::{JsonCatalog, ResourceRecord, ResourceStore};
pub use error::{CoreError, CoreResult};
pub use format::format_size;
pub use report::{OutputFormat, SizeReport, SizeRequest, render_tag, report_size};
