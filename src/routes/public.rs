use crate::AppState;
use axum::{Router, routing::get};

/// Public Router Module
///
/// Endpoints reachable by any client with no session and no role. Kept to the
/// bare service surface; everything user-facing lives behind the gate.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Liveness probe for monitoring and load balancer checks. Returns "ok"
        // immediately to verify the service is running and responsive.
        .route("/health", get(|| async { "ok" }))
}
