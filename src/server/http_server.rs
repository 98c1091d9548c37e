//! HTTP server implementation: accept loop and connection lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::signal;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::parser::{parse_request, PeerIdentity};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::pool::ConnPool;
use crate::server::response::Response;
use crate::server::router::Router;
use crate::server::status;

/// An HTTP server: accept loop, one task per connection, pooled reuse.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    /// The route table, fixed at startup.
    pub router: Arc<Router>,
    /// Idle connections kept for reuse.
    pub pool: Arc<ConnPool<TcpStream>>,
}

impl HttpServer {
    /// Create a new HTTP server from a configuration and an assembled
    /// router.
    ///
    /// The router is finished at this point: it is shared immutably with
    /// every connection task from here on.
    pub fn new(config: ServerConfig, router: Router) -> Self {
        let pool = Arc::new(ConnPool::new(config.pool_capacity));
        Self {
            config,
            router: Arc::new(router),
            pool,
        }
    }

    /// Log the registered endpoints.
    fn display_endpoints(&self) {
        info!("Registered endpoints:");
        for (method, path) in self.router.registered_routes() {
            info!("  {method} {path}");
        }
    }

    /// Set up the TCP listener.
    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Server listening on http://{addr}", addr = self.config.addr);
        Ok(listener)
    }

    /// Set up a Ctrl+C handler for graceful shutdown.
    fn setup_ctrl_c_handler(shutdown_tx: mpsc::Sender<()>, tasks: &mut JoinSet<()>) {
        tasks.spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C, initiating graceful shutdown");
                    let _ = shutdown_tx.send(()).await;
                }
                Err(e) => {
                    error!("Error setting up Ctrl+C handler: {e}");
                }
            }
        });
    }

    /// Spawn the handling task for one accepted connection.
    ///
    /// The task owns the socket. On a clean exit the socket goes back to
    /// the pool; on an error it is dropped, which closes it.
    fn spawn_connection_task(&self, mut socket: TcpStream, addr: SocketAddr, tasks: &mut JoinSet<()>) {
        let router = self.router.clone();
        let pool = self.pool.clone();
        let read_buffer_size = self.config.read_buffer_size;
        let read_timeout = self.config.read_timeout;

        tasks.spawn(async move {
            match Self::handle_connection(&mut socket, None, router, read_buffer_size, read_timeout)
                .await
            {
                Ok(()) => pool.put(socket).await,
                Err(e) => error!("Error handling connection from {addr}: {e}"),
            }
        });
    }

    /// Wait for every in-flight connection task to finish.
    ///
    /// Tasks are never cancelled: a handler that has started runs to
    /// completion even during shutdown.
    async fn await_connections(tasks: &mut JoinSet<()>) {
        info!("Waiting for {len} active tasks to complete...", len = tasks.len());
        while let Some(res) = tasks.join_next().await {
            if let Err(e) = res {
                error!("Task failed during shutdown: {e}");
            }
        }
        info!("Server shutdown complete");
    }

    /// Start the server and listen for incoming connections.
    ///
    /// Runs until a shutdown signal (Ctrl+C) arrives, then stops accepting,
    /// drains the idle pool, and waits for in-flight connections to finish.
    pub async fn start(&self) -> Result<(), Error> {
        self.display_endpoints();

        let listener = self.setup_listener().await?;

        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let mut tasks = JoinSet::new();

        Self::setup_ctrl_c_handler(shutdown_tx, &mut tasks);

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!("Shutting down server...");
                    break;
                }

                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, addr)) => {
                            self.spawn_connection_task(socket, addr, &mut tasks);
                        }
                        Err(e) => {
                            // A single failed accept never stops the server.
                            error!("Error accepting connection: {e}");
                            tokio::time::sleep(Duration::from_millis(100)).await;
                        }
                    }
                }
            }
        }

        self.pool.drain().await;
        Self::await_connections(&mut tasks).await;

        Ok(())
    }

    /// Handle a single connection: one bounded read, one dispatch, one
    /// write.
    ///
    /// Generic over the stream so tests and secure transports can drive it
    /// directly; the built-in accept loop passes a plain [`TcpStream`] and
    /// no peer identity. A secure transport performs its handshake first,
    /// then calls this with the decrypted stream and the session's
    /// [`PeerIdentity`], which is attached to the parsed request.
    ///
    /// Outcome classification:
    /// - deadline expiry answers 408 and returns `Ok` (the connection stays
    ///   reusable),
    /// - a parse failure answers 400 and returns `Ok`,
    /// - a handler error or panic answers a 500-class response and returns
    ///   `Ok`,
    /// - only I/O failures return `Err`; the caller closes the connection.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        peer: Option<PeerIdentity>,
        router: Arc<Router>,
        read_buffer_size: usize,
        read_timeout: Duration,
    ) -> Result<(), Error> {
        let mut buf = vec![0; read_buffer_size];

        // Read once, under the deadline. Whatever arrives is the whole
        // request; there is no second read.
        let n = match tokio::time::timeout(read_timeout, socket.read(&mut buf)).await {
            Ok(read_result) => read_result?,
            Err(_) => {
                warn!("Read deadline expired before a request arrived");
                let response = Response::new(status::REQUEST_TIMEOUT)
                    .with_content_type("text/plain")
                    .with_body("Request timeout");
                socket.write_all(&response.to_bytes()).await?;
                return Ok(());
            }
        };

        let request = match parse_request(&buf[..n]) {
            Ok(request) => match peer {
                Some(identity) => request.with_peer(identity),
                None => request,
            },
            Err(e) => {
                let response = Response::new(status::BAD_REQUEST)
                    .with_content_type("text/plain")
                    .with_body(format!("Error parsing request: {e}"));
                socket.write_all(&response.to_bytes()).await?;
                return Ok(());
            }
        };

        // Dispatch in its own task so a panicking handler surfaces as a
        // JoinError here instead of tearing down the connection task.
        let dispatch = tokio::spawn(async move { router.dispatch(request).await });

        let response = match dispatch.await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                warn!("Handler failed: {e}");
                let code = e.status_code();
                Response::new(code)
                    .with_content_type("text/plain")
                    .with_body(format!("{reason}: {e}", reason = status::reason_phrase(code)))
            }
            Err(e) => {
                error!("Handler panicked: {e}");
                Response::new(status::INTERNAL_SERVER_ERROR)
                    .with_content_type("text/plain")
                    .with_body("Internal Server Error")
            }
        };

        socket.write_all(&response.to_bytes()).await?;

        Ok(())
    }
}
