use axum::{Router, extract::FromRef, http::HeaderName};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod access;
pub mod config;
pub mod gate;
pub mod handlers;
pub mod models;
pub mod session;
pub mod upstream;

// Module for routing segregation (Public, Session API, Gated Pages).
pub mod routes;
use routes::{pages, public};

// --- Public Re-exports ---

// Makes core state types easily accessible to the main application entry
// point and to the integration tests.
pub use config::AppConfig;
pub use upstream::{AuthBackendState, HttpAuthBackend, MockAuthBackend};

/// ApiDoc
///
/// Auto-generates the OpenAPI documentation (Swagger JSON) for the session
/// API. It aggregates the paths and schemas decorated with `#[utoipa::path]`
/// and `#[derive(utoipa::ToSchema)]`. The resulting JSON is served at
/// `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::login, handlers::logout, handlers::me),
    components(
        schemas(
            models::LoginRequest, models::SessionUser, models::ErrorBody,
            access::Role,
        )
    ),
    tags(
        (name = "bssaj-portal", description = "BSSAJ Admin Portal session gateway API")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single, thread-safe, immutable container holding the portal's shared
/// services and configuration. Cloned per request; nothing in it mutates
/// after startup.
#[derive(Clone)]
pub struct AppState {
    /// Upstream credential verification seam (HTTP client in production,
    /// mock in tests).
    pub auth: AuthBackendState,
    /// The loaded, immutable environment configuration.
    pub config: AppConfig,
}

// --- Axum FromRef Extractor Implementations ---

// Allow handlers and extractors to selectively pull components from the
// shared AppState instead of taking the whole state.

impl FromRef<AppState> for AuthBackendState {
    fn from_ref(app_state: &AppState) -> AuthBackendState {
        app_state.auth.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles the portal's entire routing structure: the session API and
/// documentation outside the gate, the dashboard page tree behind it, and the
/// observability layers wrapping everything.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for request correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Base Router Assembly
    let base_router = Router::new()
        // Documentation: serve the auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Service endpoints: no session required.
        .merge(public::public_routes())
        // Session lifecycle API: performs its own credential checks and must
        // stay reachable without a session (see routes::session).
        .merge(routes::session::session_routes())
        .with_state(state.clone())
        // Everything else is a page navigation: the dashboard bundle behind
        // the route access gate.
        .fallback_service(pages::page_routes(state));

    // 3. Observability and Correlation Layers (applied outermost)
    base_router
        .layer(
            ServiceBuilder::new()
                // 3a. Request ID generation: a unique UUID per incoming request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 3b. Request tracing: wraps the request/response lifecycle in
                // a span carrying the generated request ID.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 3c. Request ID propagation back to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS layer (outermost).
        .layer(cors)
}

/// trace_span_logger
///
/// Customizes the `TraceLayer` span creation: every log line for a single
/// request is correlated by the `x-request-id` header alongside the HTTP
/// method and URI.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
