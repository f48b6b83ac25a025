use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Session Router Module
///
/// The cookie lifecycle API the dashboard talks to. These endpoints sit
/// outside the route access gate: login and logout must be reachable without
/// a session (the gate would otherwise lock every client out permanently),
/// and `/api/auth/me` performs its own credential check via the `CurrentUser`
/// extractor, rejecting with 401 instead of redirecting.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        // POST /api/auth/login
        // Verifies credentials upstream and installs the session cookie with
        // its fixed 30-day lifetime.
        .route("/api/auth/login", post(handlers::login))
        // POST /api/auth/logout
        // Clears the session cookie. Idempotent.
        .route("/api/auth/logout", post(handlers::logout))
        // GET /api/auth/me
        // Session introspection for the dashboard's boot sequence. Requires a
        // valid session credential.
        .route("/api/auth/me", get(handlers::me))
}
