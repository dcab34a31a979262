//! Error types for NFO conversion
//!
//! Only structural failures are errors. A malformed field value inside a
//! well-formed document degrades to the field's zero value instead.

use thiserror::Error;

/// Top-level conversion error type
#[derive(Debug, Error)]
pub enum ConvertError {
    /// XML is not well-formed (or not UTF-8), or its top-level element is not `root`
    #[error("malformed NFO document: {0}")]
    MalformedDocument(String),

    /// Byte stream is not a valid encoded document
    #[error("corrupt binary encoding: {0}")]
    CorruptEncoding(#[from] prost::DecodeError),

    /// File read/write failed in a persistence helper
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON conversion failed: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension does not map to a known format
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
