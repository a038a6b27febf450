//! Error types for MEI conversion
//!
//! `MeiValueError` is the only error the attribute layer produces. Document
//! conversion adds `ImportError` for failures before any element is reached.

use thiserror::Error;

/// An attribute carried a value with no known meaning
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unexpected value for \"{attribute}\" attribute: {value}")]
pub struct MeiValueError {
    /// Attribute name (e.g., "accid")
    pub attribute: String,

    /// Offending value, verbatim
    pub value: String,
}

impl MeiValueError {
    pub fn new(attribute: &str, value: &str) -> Self {
        Self {
            attribute: attribute.to_string(),
            value: value.to_string(),
        }
    }
}

/// Top-level document import error
#[derive(Debug, Clone, Error)]
pub enum ImportError {
    /// XML is malformed (not well-formed)
    #[error("Invalid XML: {0}")]
    InvalidXml(String),

    /// An element attribute could not be decoded
    #[error(transparent)]
    Value(#[from] MeiValueError),
}
