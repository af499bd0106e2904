//! Error types for XML reading and writing.

use mgmtfeed_model::SchemaError;
use thiserror::Error;

/// Result type for XML operations.
pub type XmlResult<T> = Result<T, XmlError>;

/// Errors that can occur while reading or writing feed documents.
///
/// Everything except [`XmlError::Write`] is a parse failure: the input was
/// not well-formed XML or did not match the declared schema.
#[derive(Debug, Error)]
pub enum XmlError {
    /// The reader rejected the input (bad syntax, mismatched tags, bad escapes).
    #[error("malformed XML: {0}")]
    Malformed(String),

    /// The input contains no element at all.
    #[error("document has no root element")]
    NoRootElement,

    /// Text or a second element found outside the root element.
    #[error("content outside the root element: {0}")]
    ContentOutsideRoot(String),

    /// The input ended while an element was still open.
    #[error("unexpected end of document inside <{0}>")]
    UnexpectedEof(String),

    /// An element or attribute uses a prefix with no namespace declaration.
    #[error("unbound namespace prefix: {0}")]
    UnboundPrefix(String),

    /// The document is well-formed but does not match the record schema.
    #[error("schema mismatch: {0}")]
    Schema(#[from] SchemaError),

    /// Serializing a record failed.
    #[error("failed to write XML: {0}")]
    Write(String),
}

impl XmlError {
    /// Returns true if this error came from reading or decoding input.
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, XmlError::Write(_))
    }
}

impl From<quick_xml::Error> for XmlError {
    fn from(err: quick_xml::Error) -> Self {
        XmlError::Malformed(err.to_string())
    }
}
