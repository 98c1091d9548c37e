//! Request routing and the middleware chain.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::parser::Request;
use crate::server::error::Error;
use crate::server::response::Response;
use crate::server::status;

/// Type alias for a boxed future that resolves to a handler result.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<Response, Error>> + Send>>;

/// Type alias for a handler function: maps a request to a response future.
pub type Handler = Arc<dyn Fn(Request) -> HandlerFuture + Send + Sync>;

/// Type alias for a middleware: wraps a handler, producing another handler.
pub type Middleware = Arc<dyn Fn(Handler) -> Handler + Send + Sync>;

/// The canonical 404 response returned for unregistered (method, path)
/// pairs.
pub fn not_found_response() -> Response {
    Response::new(status::NOT_FOUND)
        .with_content_type("text/plain")
        .with_body("404 - Not Found")
}

/// Routes requests to handlers through an ordered middleware chain.
///
/// Routes are keyed by method token and exact path: a request path must
/// match a registered path byte for byte. A second table holds
/// literal-prefix mounts for handlers that interpret the path remainder
/// themselves (static files); an exact match always wins over a prefix
/// match, and among prefix matches the longest registered prefix wins.
///
/// A router is assembled with `&mut self` calls at startup and then shared
/// immutably (typically behind an [`Arc`]) by every connection task. It is
/// not synchronized and must not be mutated once serving.
pub struct Router {
    /// method -> exact path -> handler.
    routes: HashMap<String, HashMap<String, Handler>>,
    /// method -> literal path prefix -> handler.
    prefix_routes: HashMap<String, HashMap<String, Handler>>,
    /// Middleware in registration order; the first entry is the outermost
    /// wrapper.
    middleware: Vec<Middleware>,
}

impl Router {
    /// Create an empty router.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            prefix_routes: HashMap::new(),
            middleware: Vec::new(),
        }
    }

    /// Register a handler for an exact (method, path) pair.
    ///
    /// Registering the same pair twice silently replaces the prior handler.
    pub fn add_route<F, Fut>(
        &mut self,
        method: impl Into<String>,
        path: impl Into<String>,
        handler: F,
    ) where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response, Error>> + Send + 'static,
    {
        let handler: Handler = Arc::new(move |req: Request| -> HandlerFuture {
            Box::pin(handler(req))
        });
        self.routes
            .entry(method.into())
            .or_default()
            .insert(path.into(), handler);
    }

    /// Register a handler for every path starting with a literal prefix.
    ///
    /// Prefix routes exist for mounts like the static file handler, which
    /// is trusted to interpret the rest of the path itself. Registering the
    /// same (method, prefix) twice silently replaces the prior handler.
    pub fn add_prefix_route<F, Fut>(
        &mut self,
        method: impl Into<String>,
        prefix: impl Into<String>,
        handler: F,
    ) where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response, Error>> + Send + 'static,
    {
        let handler: Handler = Arc::new(move |req: Request| -> HandlerFuture {
            Box::pin(handler(req))
        });
        self.prefix_routes
            .entry(method.into())
            .or_default()
            .insert(prefix.into(), handler);
    }

    /// Append a middleware to the chain.
    ///
    /// Registration order is execution order: the first middleware
    /// registered becomes the outermost wrapper, so it observes the request
    /// first and the response last.
    pub fn use_middleware<M>(&mut self, middleware: M)
    where
        M: Fn(Handler) -> Handler + Send + Sync + 'static,
    {
        self.middleware.push(Arc::new(middleware));
    }

    /// Every registered (method, path) pair, prefix mounts included, sorted
    /// for a stable startup listing.
    pub fn registered_routes(&self) -> Vec<(String, String)> {
        let mut routes = Vec::new();
        for (method, paths) in &self.routes {
            for path in paths.keys() {
                routes.push((method.clone(), path.clone()));
            }
        }
        for (method, prefixes) in &self.prefix_routes {
            for prefix in prefixes.keys() {
                routes.push((method.clone(), prefix.clone()));
            }
        }
        routes.sort();
        routes
    }

    /// Dispatch a request to its handler, wrapped in the middleware chain.
    ///
    /// A lookup miss returns the canonical 404 response as a success; route
    /// misses are answers, not errors. On a hit the chain is composed
    /// freshly around the handler on every call, so nothing is cached
    /// between requests through the composition.
    pub async fn dispatch(&self, request: Request) -> Result<Response, Error> {
        let handler = match self.lookup(&request.method, &request.path) {
            Some(handler) => handler,
            None => return Ok(not_found_response()),
        };

        let wrapped = self
            .middleware
            .iter()
            .rev()
            .fold(handler, |inner, middleware| middleware(inner));

        wrapped(request).await
    }

    /// Find the handler for a method and path: exact match first, then the
    /// longest matching registered prefix.
    fn lookup(&self, method: &str, path: &str) -> Option<Handler> {
        if let Some(handler) = self.routes.get(method).and_then(|paths| paths.get(path)) {
            return Some(handler.clone());
        }

        self.prefix_routes.get(method).and_then(|prefixes| {
            prefixes
                .iter()
                .filter(|(prefix, _)| path.starts_with(prefix.as_str()))
                .max_by_key(|(prefix, _)| prefix.len())
                .map(|(_, handler)| handler.clone())
        })
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
