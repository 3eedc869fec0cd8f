//! Error types for the token record protocol.

use thiserror::Error;

/// Errors raised while parsing or constructing token records.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Wire text that does not follow the record grammar.
    #[error("{line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// A field value containing a literal quote, which the wire format
    /// cannot carry.
    #[error("field '{field}' contains a literal quote")]
    QuoteInValue { field: String },
}
