//! Error types for the HTTP server.

use thiserror::Error;

use crate::parser::Error as ParserError;
use crate::server::status;

/// Errors that can occur during HTTP server operation.
///
/// Route misses are deliberately not represented here: an unregistered
/// (method, path) pair is answered with the canonical 404 response, not an
/// error.
#[derive(Debug, Error)]
pub enum Error {
    /// Error parsing an HTTP request.
    #[error("Parse error: {0}")]
    Parse(#[from] ParserError),

    /// I/O error on the underlying connection.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The connection produced no request before the read deadline.
    #[error("Request timed out")]
    RequestTimeout,

    /// A handler failed while producing a response.
    #[error("Handler error: {0}")]
    Handler(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The status code a response for this error should carry.
    ///
    /// Parse failures map to 400 and a deadline expiry to 408; everything
    /// else is a 500.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Parse(_) => status::BAD_REQUEST,
            Error::RequestTimeout => status::REQUEST_TIMEOUT,
            Error::Io(_) | Error::Handler(_) | Error::Json(_) => status::INTERNAL_SERVER_ERROR,
        }
    }
}
