use axum::{
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, header, request::Parts},
};
use chrono::Utc;
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AppConfig;

/// Name of the browser cookie carrying the session credential.
pub const SESSION_COOKIE: &str = "bssaj_session";

/// Fixed session lifetime. Both the `exp` claim and the cookie `Max-Age`
/// derive from this value, so the cookie and the credential expire together.
pub const SESSION_TTL_DAYS: i64 = 30;

const SESSION_TTL_SECS: i64 = SESSION_TTL_DAYS * 24 * 60 * 60;

/// Claims
///
/// Payload of the signed session credential. Minted at login, validated on
/// every gate evaluation and on `/api/auth/me`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's UUID as known by the upstream directory.
    pub sub: Uuid,
    /// Email the session was opened with.
    pub email: String,
    /// Display name, carried so session introspection needs no upstream call.
    pub name: String,
    /// Role claim, the string form of the closed role enumeration. Kept as a
    /// raw string so an out-of-set role still decodes and can be denied by the
    /// table lookup instead of failing the whole credential.
    pub role: String,
    /// Expiration time (seconds since epoch). Credentials past this instant
    /// must not be accepted.
    pub exp: usize,
    /// Issued-at time (seconds since epoch).
    pub iat: usize,
}

/// issue_token
///
/// Mints a session credential for a verified identity with the fixed 30-day
/// lifetime.
pub fn issue_token(
    user_id: Uuid,
    email: &str,
    name: &str,
    role: &str,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        iat: now as usize,
        exp: (now + SESSION_TTL_SECS) as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// decode_token
///
/// Validates and decodes a session credential. Any failure — malformed token,
/// signature mismatch, expired `exp` — comes back as `Err`; callers treat all
/// of them as "no valid session".
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::default();
    validation.validate_exp = true;

    decode::<Claims>(token, &decoding_key, &validation).map(|data| data.claims)
}

/// session_cookie
///
/// Builds the `Set-Cookie` value that installs the session credential.
/// `HttpOnly` keeps the credential out of script reach; `SameSite=Lax` still
/// lets top-level navigations carry it, which the gate depends on.
pub fn session_cookie(token: &str) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        SESSION_COOKIE, token, SESSION_TTL_SECS
    )
}

/// clear_session_cookie
///
/// Builds the `Set-Cookie` value that destroys the session at logout
/// (`Max-Age=0` makes the browser drop it immediately).
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax", SESSION_COOKIE)
}

/// credential_from_headers
///
/// Extracts the raw session credential from the request's `Cookie` header,
/// if present. No decoding happens here.
pub fn credential_from_headers(headers: &header::HeaderMap) -> Option<String> {
    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|cookies| {
            cookies.split(';').find_map(|cookie| {
                cookie
                    .trim()
                    .strip_prefix(SESSION_COOKIE)
                    .and_then(|rest| rest.strip_prefix('='))
            })
        })
        .map(|token| token.to_string())
}

/// CurrentUser
///
/// The resolved identity of an authenticated API request, extracted from the
/// session cookie. Handlers take this as an argument wherever a session is
/// required; extraction failure rejects the request with 401 before the
/// handler runs.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    /// Raw role claim string; the gate and handlers map it onto the closed
    /// enumeration where needed.
    pub role: String,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    AppConfig: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AppConfig::from_ref(state);

        let token =
            credential_from_headers(&parts.headers).ok_or(StatusCode::UNAUTHORIZED)?;

        let claims = match decode_token(&token, &config.session_secret) {
            Ok(claims) => claims,
            Err(e) => {
                return match e.kind() {
                    // Expired sessions are the common case for a stale cookie.
                    ErrorKind::ExpiredSignature => Err(StatusCode::UNAUTHORIZED),
                    // Everything else (bad signature, malformed token, ...).
                    _ => Err(StatusCode::UNAUTHORIZED),
                };
            }
        };

        Ok(CurrentUser {
            id: claims.sub,
            email: claims.email,
            name: claims.name,
            role: claims.role,
        })
    }
}
