//! HTTP parser module.
//!
//! This module provides functionality for decoding a raw request buffer into
//! a structured [`Request`] with a focus on simplicity and correctness.

mod error;
mod identity;
mod request;
mod tests;

// Re-export public items
pub use error::Error;
pub use identity::PeerIdentity;
pub use request::Request;

// Re-export the parse_request function
pub use request::parse_request;
