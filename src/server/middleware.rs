//! Built-in middleware: request logging and HTTPS redirection.

use std::sync::Arc;
use std::time::Instant;

use log::{info, warn};

use crate::parser::Request;
use crate::server::response::Response;
use crate::server::router::{Handler, HandlerFuture};
use crate::server::status;

/// Middleware that logs one line per dispatched request.
///
/// Successful dispatches are logged at info level as
/// `<method> <path> - <status> (<elapsed>)`; failures at warn level with
/// the error. Register it first so it times the whole chain.
pub fn logging_middleware(next: Handler) -> Handler {
    Arc::new(move |request: Request| -> HandlerFuture {
        let next = next.clone();
        Box::pin(async move {
            let method = request.method.clone();
            let path = request.path.clone();
            let start = Instant::now();

            let result = next(request).await;

            let elapsed = start.elapsed();
            match &result {
                Ok(response) => {
                    info!("{method} {path} - {status} ({elapsed:?})", status = response.status)
                }
                Err(e) => warn!("{method} {path} - failed: {e} ({elapsed:?})"),
            }

            result
        })
    })
}

/// Build a middleware that redirects plain-transport requests to HTTPS.
///
/// A request that carries no peer identity (nothing secure underneath) and
/// whose path does not start with `exempt_prefix` is answered with a 301
/// pointing at `https://<Host header><path>` instead of reaching the
/// handler. Requests arriving over a secure transport pass through
/// untouched, as do paths under the exempt prefix.
pub fn https_redirect_middleware(exempt_prefix: impl Into<String>) -> impl Fn(Handler) -> Handler {
    let exempt_prefix = exempt_prefix.into();
    move |next: Handler| -> Handler {
        let exempt_prefix = exempt_prefix.clone();
        Arc::new(move |request: Request| -> HandlerFuture {
            let next = next.clone();
            let exempt_prefix = exempt_prefix.clone();
            Box::pin(async move {
                if request.peer.is_none() && !request.path.starts_with(exempt_prefix.as_str()) {
                    let host = request.header("Host").unwrap_or("");
                    let location = format!("https://{host}{path}", path = request.path);
                    return Ok(Response::new(status::MOVED_PERMANENTLY)
                        .with_header("Location", location));
                }
                next(request).await
            })
        })
    }
}
