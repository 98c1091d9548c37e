//! Built-in handlers: static file serving and content-type lookup.

use std::path::PathBuf;

use log::{debug, error};

use crate::parser::Request;
use crate::server::response::Response;
use crate::server::router::{not_found_response, HandlerFuture};
use crate::server::status;

/// Map a file extension (without the leading dot) to a MIME type.
///
/// Unknown extensions fall back to `application/octet-stream`.
pub fn content_type_for(extension: &str) -> &'static str {
    match extension {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "xml" => "application/xml",
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "mp3" => "audio/mpeg",
        "mp4" => "video/mp4",
        _ => "application/octet-stream",
    }
}

/// Build a handler that serves files from `root` for paths under `prefix`.
///
/// Intended for a prefix mount (see `Router::add_prefix_route`): the mount
/// prefix is stripped from the verbatim request path, an empty remainder or
/// `/` maps to `index.html`, and any remainder containing `..` is rejected
/// with the canonical 404 before the filesystem is touched. Missing files
/// and directories answer 404; a file that exists but cannot be read
/// answers 500.
pub fn static_file_handler(
    prefix: impl Into<String>,
    root: impl Into<PathBuf>,
) -> impl Fn(Request) -> HandlerFuture {
    let prefix = prefix.into();
    let root = root.into();

    move |request: Request| -> HandlerFuture {
        let prefix = prefix.clone();
        let root = root.clone();

        Box::pin(async move {
            let mut file_path = match request.path.strip_prefix(prefix.as_str()) {
                Some(rest) => rest.to_string(),
                None => return Ok(not_found_response()),
            };

            if file_path.is_empty() || file_path == "/" {
                file_path = "index.html".to_string();
            }

            if file_path.contains("..") {
                debug!("Rejected traversal attempt: {path}", path = request.path);
                return Ok(not_found_response());
            }

            let full_path = root.join(file_path.trim_start_matches('/'));

            let metadata = match tokio::fs::metadata(&full_path).await {
                Ok(metadata) => metadata,
                Err(e) => {
                    debug!("File not served ({path}): {e}", path = full_path.display());
                    return Ok(not_found_response());
                }
            };
            if metadata.is_dir() {
                return Ok(not_found_response());
            }

            match tokio::fs::read(&full_path).await {
                Ok(contents) => {
                    let extension = full_path
                        .extension()
                        .and_then(|ext| ext.to_str())
                        .unwrap_or("");
                    Ok(Response::new(status::OK)
                        .with_content_type(content_type_for(extension))
                        .with_body(contents))
                }
                Err(e) => {
                    error!("Error reading {path}: {e}", path = full_path.display());
                    Ok(Response::new(status::INTERNAL_SERVER_ERROR)
                        .with_content_type("text/plain")
                        .with_body("500 - Internal Server Error"))
                }
            }
        })
    }
}
