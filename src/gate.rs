use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    AppState,
    access::{self, DEFAULT_LANDING, GateDecision, SessionState},
    session,
};

/// route_gate
///
/// Middleware form of the route access gate, applied to the page-serving tree.
/// Per navigation it resolves the session state from the cookie, evaluates the
/// pure decision function, and either forwards the request or answers with a
/// 307 redirect. The session API endpoints live outside this layer; the gate
/// only governs page navigation.
pub async fn route_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();

    // Resolve the credential once per request. Decode failure is ordinary
    // control flow here, not an error path.
    let session_state = match session::credential_from_headers(request.headers()) {
        None => SessionState::Missing,
        Some(token) => match session::decode_token(&token, &state.config.session_secret) {
            Ok(claims) => SessionState::Authenticated { role: claims.role },
            Err(_) => SessionState::Invalid,
        },
    };

    match access::evaluate(&path, &session_state) {
        GateDecision::Allow => next.run(request).await,
        GateDecision::ToLogin { next: Some(original) } => {
            tracing::debug!(path = %path, "unauthenticated navigation, redirecting to login");
            // `original` comes from Uri::path() and is already in encoded form.
            Redirect::temporary(&format!("/login?next={original}")).into_response()
        }
        GateDecision::ToLogin { next: None } => {
            Redirect::temporary("/login").into_response()
        }
        GateDecision::ToLanding => Redirect::temporary(DEFAULT_LANDING).into_response(),
        GateDecision::ToRoot => {
            tracing::debug!(path = %path, "navigation outside role table, redirecting to root");
            Redirect::temporary("/").into_response()
        }
    }
}
