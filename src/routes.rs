//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dev server only hosts the page shell and the wasm bundle built from the
//! `canvas` crate. All workspace state lives in the browser; nothing here reads
//! or writes it. Unknown paths fall back to `index.html`.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Full application router serving `static_dir`.
pub fn app(static_dir: &Path) -> Router {
    let index = ServeFile::new(static_dir.join("index.html"));
    let site = ServeDir::new(static_dir)
        .append_index_html_on_directories(true)
        .fallback(index);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
