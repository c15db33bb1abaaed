//! Error types for export operations

use thiserror::Error;

/// Errors that can occur while exporting problems or inlining images
#[derive(Error, Debug)]
pub enum ExportError {
    /// Error reading or writing files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An image reference whose extension maps to no known MIME type
    #[error("unsupported image type '{0}'")]
    UnsupportedImageType(String),

    /// An embedded image payload that is not valid base64
    #[error("invalid image payload: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
