//! Server configuration.

use std::net::SocketAddr;
use std::time::Duration;

/// HTTP server configuration.
#[derive(Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The read buffer size. A request must fit into one read of this size;
    /// the server never reads again to complete a body.
    pub read_buffer_size: usize,
    /// How long to wait for the first read on a connection before answering
    /// with 408 Request Timeout.
    pub read_timeout: Duration,
    /// The maximum number of idle connections kept for reuse; connections
    /// returned beyond this are closed.
    pub pool_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8080".parse().unwrap(),
            read_buffer_size: 8192,
            read_timeout: Duration::from_secs(30),
            pool_capacity: 100,
        }
    }
}
