//! HTTP response types and utilities.

use std::collections::HashMap;

use serde::Serialize;

use crate::server::error::Error;
use crate::server::status;

/// Represents an HTTP response.
///
/// Responses are assembled with a consuming builder and serialized with
/// [`Response::to_bytes`]. Handlers and middleware only ever produce and
/// transform `Response` values; writing them to a connection is the
/// server's job.
#[derive(Debug, Clone)]
pub struct Response {
    /// The protocol version emitted on the status line.
    pub version: String,
    /// The HTTP status code.
    pub status: u16,
    /// The reason phrase emitted after the status code. Filled from the
    /// status registry when the status is set; empty for codes the registry
    /// does not know.
    pub reason: String,
    /// The HTTP headers. Emission order follows map iteration order and is
    /// not part of the wire contract.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new HTTP response with the given status code.
    ///
    /// The version defaults to `HTTP/1.1` and the reason phrase is looked
    /// up via [`status::reason_phrase`].
    pub fn new(status: u16) -> Self {
        Self {
            version: "HTTP/1.1".to_string(),
            status,
            reason: status::reason_phrase(status).to_string(),
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Replace the status code, refreshing the reason phrase from the
    /// registry.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self.reason = status::reason_phrase(status).to_string();
        self
    }

    /// Add or replace a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the content type.
    pub fn with_content_type(self, content_type: impl Into<String>) -> Self {
        self.with_header("Content-Type", content_type)
    }

    /// Set the response body.
    ///
    /// Also writes the `Content-Length` header to the body's byte length,
    /// overwriting any previous value. A caller that wants a different
    /// `Content-Length` can still override it with [`Response::with_header`]
    /// after setting the body.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        let content_length = self.body.len().to_string();
        self.with_header("Content-Length", content_length)
    }

    /// Set the response body to a value serialized as JSON.
    ///
    /// Sets `Content-Type: application/json` and the body (which in turn
    /// sets `Content-Length`).
    pub fn with_json<T: Serialize>(self, value: &T) -> Result<Self, Error> {
        let json = serde_json::to_vec(value)?;
        Ok(self.with_content_type("application/json").with_body(json))
    }

    /// Serialize the response to wire bytes.
    ///
    /// Emits the status line, each header in map iteration order, a blank
    /// line, and the raw body. Never fails: an unknown status code simply
    /// formats with an empty reason phrase.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        let status_line = format!("{} {} {}\r\n", self.version, self.status, self.reason);
        bytes.extend_from_slice(status_line.as_bytes());

        for (name, value) in &self.headers {
            let header_line = format!("{name}: {value}\r\n");
            bytes.extend_from_slice(header_line.as_bytes());
        }

        bytes.extend_from_slice(b"\r\n");
        bytes.extend_from_slice(&self.body);

        bytes
    }
}
