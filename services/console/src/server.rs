//! Static site router for the dashboard shell

use std::path::Path;

use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

/// Build the axum router serving the dashboard shell
pub fn build_router(site_root: &Path) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
}

/// HTML shell that loads and mounts the WASM bundle
async fn index_handler() -> impl IntoResponse {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>CloudForge Secure Platform</title>
</head>
<body>
    <script type="module">
        import init, { hydrate } from '/pkg/console-dashboard.js';
        await init();
        hydrate();
    </script>
</body>
</html>"#,
    )
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
