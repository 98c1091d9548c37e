//! Error types for the HTTP parser.

use thiserror::Error;

/// Errors that can occur during HTTP request parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// The buffer contains no blank line separating headers from the body.
    #[error("Missing header/body separator")]
    MissingBodySeparator,

    /// The request line does not split into exactly three tokens.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// A header line does not split into a name/value pair on `": "`.
    #[error("Malformed header: {0}")]
    MalformedHeader(String),
}
