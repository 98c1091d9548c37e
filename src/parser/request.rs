//! HTTP request parsing and representation.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::parser::error::Error;
use crate::parser::identity::PeerIdentity;

/// Represents a parsed HTTP request.
///
/// Method, path, and version are kept as the exact tokens found on the
/// request line. The engine does not restrict them to a known set: a request
/// with an unrecognized method parses fine and simply misses in the route
/// table. The path is used verbatim; it is never normalized or
/// percent-decoded.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method token (GET, POST, ...).
    pub method: String,
    /// The request path, exactly as it appeared on the request line.
    pub path: String,
    /// The HTTP version token (e.g. "HTTP/1.1").
    pub version: String,
    /// The HTTP headers. Names are stored exactly as received and lookups
    /// are case-sensitive. A name sent twice keeps only its last value.
    pub headers: HashMap<String, String>,
    /// The request body, verbatim.
    pub body: Vec<u8>,
    /// Identity metadata for the peer, present only when a secure transport
    /// supplied it.
    pub peer: Option<PeerIdentity>,
}

impl Request {
    /// Create a new HTTP request with an empty body.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method token
    /// * `path` - The request path
    /// * `version` - The HTTP version token
    /// * `headers` - The HTTP headers
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        version: impl Into<String>,
        headers: HashMap<String, String>,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            version: version.into(),
            headers,
            body: Vec::new(),
            peer: None,
        }
    }

    /// Attach peer identity metadata from a secure transport.
    ///
    /// The built-in TCP accept loop never calls this; a TLS front end that
    /// completed a handshake does, before dispatching the request.
    pub fn with_peer(mut self, peer: PeerIdentity) -> Self {
        self.peer = Some(peer);
        self
    }

    /// Get a header value by its exact name.
    ///
    /// Header names are stored exactly as received, so the lookup is
    /// case-sensitive: `header("Host")` and `header("host")` are different
    /// queries.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Check whether a header with this exact name exists.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }

    /// Check if the request declares a JSON body.
    pub fn is_json(&self) -> bool {
        self.header("Content-Type")
            .is_some_and(|value| value.starts_with("application/json"))
    }

    /// Parse the request body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Parse an HTTP request from a byte slice.
///
/// The buffer is split at the first `\r\n\r\n`; everything after it is the
/// body, verbatim. A declared `Content-Length` is not checked against the
/// body: whatever bytes arrived in the buffer are the whole message, and no
/// follow-up read is performed. The caller bounds how many bytes it reads
/// before parsing; there are no internal size limits.
///
/// # Arguments
///
/// * `input` - A byte slice containing one HTTP request
///
/// # Returns
///
/// The parsed request, or an error describing the first malformed piece.
///
/// # Examples
///
/// ```
/// use minihttp_rs::parse_request;
///
/// let request_bytes = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
/// let request = parse_request(request_bytes).unwrap();
///
/// assert_eq!(request.method, "GET");
/// assert_eq!(request.path, "/index.html");
/// assert_eq!(request.version, "HTTP/1.1");
/// assert_eq!(request.header("Host"), Some("example.com"));
/// assert!(request.body.is_empty());
/// ```
pub fn parse_request(input: &[u8]) -> Result<Request, Error> {
    // Split at the first blank line. Without one the request is unusable.
    let separator = find_separator(input).ok_or(Error::MissingBodySeparator)?;
    let body = input[separator + 4..].to_vec();

    // Header text with invalid UTF-8 degrades to replacement characters
    // instead of failing; the body stays raw bytes either way.
    let head = String::from_utf8_lossy(&input[..separator]);
    let mut lines = head.split("\r\n");

    // Parse the request line into exactly three tokens.
    let request_line = lines.next().unwrap_or_default();
    let tokens: Vec<&str> = request_line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(Error::MalformedRequestLine(request_line.to_string()));
    }

    // Parse the headers. Names and values are kept exactly as received;
    // a duplicate name overwrites, so the last occurrence wins.
    let mut headers = HashMap::new();
    for line in lines {
        match line.split_once(": ") {
            Some((name, value)) => {
                headers.insert(name.to_string(), value.to_string());
            }
            None => return Err(Error::MalformedHeader(line.to_string())),
        }
    }

    Ok(Request {
        method: tokens[0].to_string(),
        path: tokens[1].to_string(),
        version: tokens[2].to_string(),
        headers,
        body,
        peer: None,
    })
}

fn find_separator(input: &[u8]) -> Option<usize> {
    input.windows(4).position(|window| window == b"\r\n\r\n")
}
