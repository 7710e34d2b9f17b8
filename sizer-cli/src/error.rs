// sizer-cli/src/error.rs
//
// CLI error handling: result alias over the core error type and the mapping
// from error kinds to process exit codes.

use sizer_core::{CoreError, CoreResult};

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Maps an error to the exit code documented for the CLI boundary.
///
/// The three rejection kinds of the report operation get distinct codes so
/// callers can discriminate them without parsing stderr; catalog and I/O
/// failures share the generic failure code.
#[must_use]
pub fn exit_code(error: &CoreError) -> i32 {
    match error {
        CoreError::MissingResourceId => 2,
        CoreError::ResourceNotFound => 3,
        CoreError::FileNotFound => 4,
        _ => 1,
    }
}
