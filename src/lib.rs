//! A minimal HTTP/1.x protocol engine.
//!
//! This library provides an HTTP request parser and a small asynchronous server
//! with a focus on simplicity, correctness, and predictable behavior.
//!
//! # Features
//!
//! - Parse HTTP/1.x requests from byte slices, keeping bodies byte-exact
//! - Exact-match and prefix routing with async handlers and middleware
//! - JSON serialization and deserialization for request and response bodies
//! - Proper error handling with descriptive error messages
//! - Per-request read deadlines, panic containment, and connection reuse
//! - Graceful shutdown on Ctrl-C
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use minihttp_rs::parse_request;
//!
//! let request_bytes = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
//!
//! match parse_request(request_bytes) {
//!     Ok(request) => {
//!         println!("Method: {}", request.method);
//!         println!("Path: {}", request.path);
//!         println!("Version: {}", request.version);
//!         println!("Headers: {:?}", request.headers);
//!     },
//!     Err(err) => {
//!         println!("Error parsing request: {}", err);
//!     }
//! }
//! ```
//!
//! ## Error handling
//!
//! ```
//! use minihttp_rs::{parse_request, ParserError};
//!
//! let truncated_request = b"GET /index.html HTTP/1.1\r\nHost: example.com";
//!
//! match parse_request(truncated_request) {
//!     Ok(_) => println!("Request parsed successfully"),
//!     Err(ParserError::MissingBodySeparator) => println!("No blank line after the headers"),
//!     Err(ParserError::MalformedRequestLine(line)) => println!("Malformed request line: {}", line),
//!     Err(err) => println!("Other error: {}", err),
//! }
//! ```
//!
//! ## JSON support
//!
//! ```
//! use minihttp_rs::{status, Response};
//! use serde::{Deserialize, Serialize};
//!
//! // Define a data structure for JSON
//! #[derive(Serialize, Deserialize)]
//! struct User {
//!     name: String,
//!     email: String,
//! }
//!
//! // Create a response with JSON body
//! let user = User {
//!     name: "John Doe".to_string(),
//!     email: "john@example.com".to_string(),
//! };
//!
//! let response = Response::new(status::OK)
//!     .with_json(&user)
//!     .unwrap();
//!
//! // Parse JSON from a request
//! // Assuming `request` is a Request with a JSON body
//! // if request.is_json() {
//! //     let user: User = request.json().unwrap();
//! //     println!("User name: {}", user.name);
//! // }
//! ```
//!
//! ## Running a server
//!
//! ```no_run
//! use minihttp_rs::{status, HttpServer, Response, Router, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), minihttp_rs::ServerError> {
//!     let mut router = Router::new();
//!     router.add_route("GET", "/hello", |_req| async {
//!         Ok(Response::new(status::OK)
//!             .with_content_type("text/plain")
//!             .with_body("Hello, World!"))
//!     });
//!
//!     HttpServer::new(ServerConfig::default(), router).start().await
//! }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{parse_request, Error as ParserError, PeerIdentity, Request};
pub use server::{
    https_redirect_middleware, logging_middleware, not_found_response, static_file_handler,
    status, ConnPool, Error as ServerError, Handler, HandlerFuture, HttpServer, Middleware,
    Response, Router, ServerConfig,
};
