//! A small demonstration server.
//!
//! Serves a couple of text routes, an echo endpoint, and static files from a
//! `public` directory next to the executable. Listens on 127.0.0.1:8080; run
//! with `RUST_LOG=info` to see per-request logs.

use std::path::PathBuf;

use minihttp_rs::{
    logging_middleware, static_file_handler, status, HttpServer, Response, Router, ServerConfig,
};

/// Locate the static file root: `public/` next to the executable, falling
/// back to a relative path for `cargo run`.
fn public_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("public")))
        .unwrap_or_else(|| PathBuf::from("public"))
}

#[tokio::main]
async fn main() -> Result<(), minihttp_rs::ServerError> {
    env_logger::init();

    let mut router = Router::new();
    router.use_middleware(logging_middleware);

    router.add_route("GET", "/", |_req| async {
        Ok(Response::new(status::OK)
            .with_content_type("text/plain")
            .with_body("Welcome to minihttp-rs!"))
    });

    router.add_route("GET", "/hello", |_req| async {
        Ok(Response::new(status::OK)
            .with_content_type("text/plain")
            .with_body("Hello, World!"))
    });

    router.add_route("POST", "/echo", |req| async move {
        Ok(Response::new(status::OK)
            .with_content_type("text/plain")
            .with_body(req.body))
    });

    router.add_prefix_route(
        "GET",
        "/static/",
        static_file_handler("/static/", public_dir()),
    );

    HttpServer::new(ServerConfig::default(), router).start().await
}
