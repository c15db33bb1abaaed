//! Error types for FPS parsing

use thiserror::Error;

/// Errors that can occur while reading or parsing an FPS document
///
/// Every variant is fatal to the document being processed: the parser
/// raises on the first violation and produces no partial records.
#[derive(Error, Debug)]
pub enum Error {
    /// Error reading the document from disk
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML syntax error, propagated from the underlying reader
    #[error("malformed document: {0}")]
    Malformed(#[from] quick_xml::Error),

    /// Document ended inside an open element
    #[error("malformed document: unexpected end of file in <{0}>")]
    UnexpectedEof(String),

    /// The root element's version attribute is not a supported revision
    #[error("unsupported version '{0}'")]
    UnsupportedVersion(String),

    /// A limit tag carries a unit outside its allowed set
    #[error("invalid {tag} unit '{unit}'")]
    InvalidUnit { tag: &'static str, unit: String },

    /// A limit tag's value is non-positive or not a number
    #[error("invalid {tag} value '{value}'")]
    InvalidValue { tag: &'static str, value: String },

    /// A code-snippet tag lacks its required language attribute
    #[error("invalid {0}, language name is missing")]
    MissingLanguage(&'static str),

    /// A sample/test output appeared without its pending input (or the
    /// other way around)
    #[error("misplaced <{0}> tag")]
    OutOfOrderTag(&'static str),
}

/// Result type for FPS parsing
pub type Result<T> = std::result::Result<T, Error>;
