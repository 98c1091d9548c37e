//! HTTP status codes and reason phrases.
//!
//! Status codes are plain `u16` values with no structural validation; the
//! constants below name the ones this crate emits itself, and handlers are
//! free to use any other integer.

/// 200 OK.
pub const OK: u16 = 200;
/// 201 Created.
pub const CREATED: u16 = 201;
/// 202 Accepted.
pub const ACCEPTED: u16 = 202;
/// 204 No Content.
pub const NO_CONTENT: u16 = 204;
/// 301 Moved Permanently.
pub const MOVED_PERMANENTLY: u16 = 301;
/// 302 Found.
pub const FOUND: u16 = 302;
/// 400 Bad Request.
pub const BAD_REQUEST: u16 = 400;
/// 401 Unauthorized.
pub const UNAUTHORIZED: u16 = 401;
/// 403 Forbidden.
pub const FORBIDDEN: u16 = 403;
/// 404 Not Found.
pub const NOT_FOUND: u16 = 404;
/// 405 Method Not Allowed.
pub const METHOD_NOT_ALLOWED: u16 = 405;
/// 408 Request Timeout.
pub const REQUEST_TIMEOUT: u16 = 408;
/// 418 I'm a teapot.
pub const IM_A_TEAPOT: u16 = 418;
/// 500 Internal Server Error.
pub const INTERNAL_SERVER_ERROR: u16 = 500;
/// 501 Not Implemented.
pub const NOT_IMPLEMENTED: u16 = 501;
/// 502 Bad Gateway.
pub const BAD_GATEWAY: u16 = 502;
/// 503 Service Unavailable.
pub const SERVICE_UNAVAILABLE: u16 = 503;

/// Get the standard reason phrase for a status code.
///
/// Returns an empty string for codes not in the registry, so a status line
/// can be formatted for any integer without a fallible lookup.
pub fn reason_phrase(code: u16) -> &'static str {
    match code {
        OK => "OK",
        CREATED => "Created",
        ACCEPTED => "Accepted",
        NO_CONTENT => "No Content",
        MOVED_PERMANENTLY => "Moved Permanently",
        FOUND => "Found",
        BAD_REQUEST => "Bad Request",
        UNAUTHORIZED => "Unauthorized",
        FORBIDDEN => "Forbidden",
        NOT_FOUND => "Not Found",
        METHOD_NOT_ALLOWED => "Method Not Allowed",
        REQUEST_TIMEOUT => "Request Timeout",
        IM_A_TEAPOT => "I'm a teapot",
        INTERNAL_SERVER_ERROR => "Internal Server Error",
        NOT_IMPLEMENTED => "Not Implemented",
        BAD_GATEWAY => "Bad Gateway",
        SERVICE_UNAVAILABLE => "Service Unavailable",
        _ => "",
    }
}
