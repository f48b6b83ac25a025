use crate::{
    AppState,
    models::{ErrorBody, LoginRequest, SessionUser},
    session::{self, CurrentUser},
    upstream::AuthBackendError,
};
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

/// login
///
/// [Public Route] Opens a session. The email/password pair is verified against
/// the upstream directory; the portal itself never checks passwords. On
/// success the response installs the session cookie (30-day lifetime) and
/// returns the session user for the dashboard to render.
///
/// *Error mapping*: a rejected pair is 401; an unreachable or misbehaving
/// upstream is 502, since no credential verdict exists in that case.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened", body = SessionUser),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 502, description = "Upstream unavailable", body = ErrorBody)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let user = match state
        .auth
        .verify_credentials(&payload.email, &payload.password)
        .await
    {
        Ok(user) => user,
        Err(AuthBackendError::InvalidCredentials) => {
            tracing::info!(email = %payload.email, "login rejected");
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorBody {
                    message: "Invalid email or password".to_string(),
                }),
            ));
        }
        Err(AuthBackendError::Upstream(e)) => {
            tracing::error!("credential verification failed upstream: {e}");
            return Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorBody {
                    message: "Authentication service unavailable".to_string(),
                }),
            ));
        }
    };

    let token = session::issue_token(
        user.id,
        &user.email,
        &user.name,
        &user.role,
        &state.config.session_secret,
    )
    .map_err(|e| {
        tracing::error!("failed to sign session credential: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                message: "Could not open session".to_string(),
            }),
        )
    })?;

    tracing::info!(email = %user.email, role = %user.role, "session opened");

    Ok((
        [(header::SET_COOKIE, session::session_cookie(&token))],
        Json(SessionUser::from(user)),
    ))
}

/// logout
///
/// [Public Route] Destroys the session by clearing the cookie. Idempotent:
/// logging out without a session is still a 204.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses((status = 204, description = "Session cleared"))
)]
pub async fn logout() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, session::clear_session_cookie())],
    )
}

/// me
///
/// [Authenticated Route] Returns the identity bound to the session cookie.
/// The dashboard calls this on boot to restore its client-side auth state.
/// The identity is resolved entirely from the credential's claims; no
/// upstream call is made.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current session user", body = SessionUser),
        (status = 401, description = "No valid session")
    )
)]
pub async fn me(user: CurrentUser) -> Json<SessionUser> {
    Json(SessionUser {
        id: user.id,
        email: user.email,
        name: user.name,
        role: user.role,
    })
}
