//! HTTP server implementation for minihttp-rs.
//!
//! Responses, routing with middleware, built-in handlers, the idle
//! connection pool, and the accept loop that ties them to the parser.

pub mod status;

mod config;
mod error;
mod handlers;
mod http_server;
mod middleware;
mod pool;
mod response;
mod router;

// Re-export public items
pub use config::ServerConfig;
pub use error::Error;
pub use handlers::{content_type_for, static_file_handler};
pub use http_server::HttpServer;
pub use middleware::{https_redirect_middleware, logging_middleware};
pub use pool::ConnPool;
pub use response::Response;
pub use router::{not_found_response, Handler, HandlerFuture, Middleware, Router};
