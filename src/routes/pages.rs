use crate::{AppState, gate};
use axum::{Router, middleware};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Pages Router Module
///
/// Serves the client-rendered dashboard bundle. The route access gate wraps
/// this entire tree, so every page navigation is evaluated before any file is
/// served. Paths that name no file on disk fall back to `index.html`, the
/// standard shape for a client-routed SPA: the browser gets the shell and the
/// frontend router takes over from there.
pub fn page_routes(state: AppState) -> Router {
    let static_dir = Path::new(&state.config.static_dir).to_path_buf();
    let shell = ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .fallback_service(shell)
        .layer(middleware::from_fn_with_state(state, gate::route_gate))
}
