//! Size report resolution and rendering.
//!
//! This module carries the reporter itself: resolve a resource ID to a path
//! through a [`ResourceStore`], stat the file, and render the result in one
//! of the three output formats. Success and failure are modelled as a tagged
//! result internally; [`render_tag`] collapses both into the single string
//! channel the original templating-tag contract uses.

use crate::catalog::ResourceStore;
use crate::error::{CoreError, CoreResult};
use crate::format::format_size;

use log::debug;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

/// Output format selector for a size report.
///
/// Unrecognized selector strings fall back to `Formatted`, which is also the
/// default when no selector is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Integer byte count only.
    Raw,
    /// Human-readable string only (e.g. "2.50 MB").
    #[default]
    Formatted,
    /// Compact JSON object with both `bytes` and `formatted`.
    Both,
}

impl OutputFormat {
    /// Parses a selector string. Anything other than `"raw"` or `"both"`
    /// (including the empty string) selects `Formatted`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "raw" => Self::Raw,
            "both" => Self::Both,
            _ => Self::Formatted,
        }
    }
}

/// A typed size report request: which record, and how to render the result.
#[derive(Debug, Clone)]
pub struct SizeRequest {
    pub id: u64,
    pub format: OutputFormat,
}

impl SizeRequest {
    /// Creates a request for `id` with the default `Formatted` output.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            format: OutputFormat::default(),
        }
    }
}

/// Successful outcome of a size report.
///
/// Field order is significant: the `both` output serializes this struct
/// directly, producing `{"bytes":<int>,"formatted":"<string>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeReport {
    pub bytes: u64,
    pub formatted: String,
}

impl SizeReport {
    /// Renders the report in the requested output format.
    pub fn render(&self, format: OutputFormat) -> CoreResult<String> {
        match format {
            OutputFormat::Raw => Ok(self.bytes.to_string()),
            OutputFormat::Formatted => Ok(self.formatted.clone()),
            OutputFormat::Both => Ok(serde_json::to_string(self)?),
        }
    }
}

/// Resolves a size report for the requested resource.
///
/// Checks run in a fixed order: ID presence, record existence, file
/// existence. The returned report carries both the byte count and its
/// human-readable form regardless of the requested output format.
///
/// # Errors
///
/// * `CoreError::MissingResourceId` - the request carries a zero ID
/// * `CoreError::ResourceNotFound` - no record exists for the ID
/// * `CoreError::FileNotFound` - the record's path is empty, missing, or a directory
/// * `CoreError::Io` - the path exists but could not be stat-ed
pub fn report_size(store: &impl ResourceStore, request: &SizeRequest) -> CoreResult<SizeReport> {
    if request.id == 0 {
        return Err(CoreError::MissingResourceId);
    }

    let record = store
        .get(request.id)?
        .ok_or(CoreError::ResourceNotFound)?;
    debug!("resource {} -> '{}'", request.id, record.content);

    let bytes = file_size(Path::new(&record.content))?;
    debug!("'{}' is {} byte(s)", record.content, bytes);

    Ok(SizeReport {
        bytes,
        formatted: format_size(bytes),
    })
}

/// Renders a size report through the single string channel of the original
/// templating-tag contract: the success payload for the requested format, or
/// an `"Error: "`-prefixed message. An absent or zero ID counts as missing.
pub fn render_tag(store: &impl ResourceStore, id: Option<u64>, format: &str) -> String {
    let format = OutputFormat::parse(format);
    let result = match id {
        None | Some(0) => Err(CoreError::MissingResourceId),
        Some(id) => report_size(store, &SizeRequest { id, format }),
    };

    match result.and_then(|report| report.render(format)) {
        Ok(payload) => payload,
        Err(e) => format!("Error: {e}"),
    }
}

/// Byte size of the file at `path`.
///
/// A missing path and a directory both count as "File not found" (a record
/// pointing at a directory has no meaningful file size). Other stat failures,
/// such as a permission error on a parent directory, surface as I/O errors.
fn file_size(path: &Path) -> CoreResult<u64> {
    if path.as_os_str().is_empty() {
        return Err(CoreError::FileNotFound);
    }

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(CoreError::FileNotFound),
        Err(e) => return Err(CoreError::Io(e)),
    };

    if metadata.is_dir() {
        return Err(CoreError::FileNotFound);
    }

    Ok(metadata.len())
}
