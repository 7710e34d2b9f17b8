use thiserror::Error;

/// Custom error types for sizer.
///
/// The first three variants are the user-facing rejection kinds of the size
/// report operation; their `Display` output is the exact message shown at the
/// boundary (prefixed with `"Error: "` by the tag renderer and the CLI).
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Resource ID not specified")]
    MissingResourceId,

    #[error("Resource not found")]
    ResourceNotFound,

    #[error("File not found")]
    FileNotFound,

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sizer operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
