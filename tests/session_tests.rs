use axum::http::{HeaderMap, HeaderValue, header};
use bssaj_portal::session::{
    Claims, SESSION_COOKIE, SESSION_TTL_DAYS, clear_session_cookie, credential_from_headers,
    decode_token, issue_token, session_cookie,
};
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

const TEST_SECRET: &str = "session-test-secret-value-1234567890";

// --- Credential mint/decode ---

#[test]
fn issue_then_decode_round_trips_the_claims() {
    let user_id = Uuid::new_v4();
    let token = issue_token(user_id, "admin@bssaj.org", "Portal Admin", "ADMIN", TEST_SECRET)
        .expect("failed to mint token");

    let claims = decode_token(&token, TEST_SECRET).expect("failed to decode token");
    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.email, "admin@bssaj.org");
    assert_eq!(claims.name, "Portal Admin");
    assert_eq!(claims.role, "ADMIN");
    // Fixed 30-day lifetime.
    assert_eq!(
        claims.exp - claims.iat,
        (SESSION_TTL_DAYS * 24 * 60 * 60) as usize
    );
}

#[test]
fn decode_rejects_a_token_signed_with_another_secret() {
    let token = issue_token(Uuid::new_v4(), "a@b.c", "A", "MEMBER", "some-other-secret").unwrap();
    assert!(decode_token(&token, TEST_SECRET).is_err());
}

#[test]
fn decode_rejects_garbage() {
    assert!(decode_token("not-a-jwt", TEST_SECRET).is_err());
    assert!(decode_token("", TEST_SECRET).is_err());
    assert!(decode_token("aaaa.bbbb.cccc", TEST_SECRET).is_err());
}

#[test]
fn decode_rejects_an_expired_credential() {
    // Mint a credential whose exp is well past the default validation leeway.
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: Uuid::new_v4(),
        email: "old@bssaj.org".to_string(),
        name: "Old Session".to_string(),
        role: "ADMIN".to_string(),
        iat: (now - 600) as usize,
        exp: (now - 300) as usize,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    assert!(decode_token(&token, TEST_SECRET).is_err());
}

// --- Cookie attributes ---

#[test]
fn session_cookie_carries_the_thirty_day_expiry() {
    let cookie = session_cookie("tok123");
    assert!(cookie.starts_with(&format!("{SESSION_COOKIE}=tok123;")));
    assert!(cookie.contains("Max-Age=2592000"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
}

#[test]
fn clear_cookie_expires_immediately() {
    let cookie = clear_session_cookie();
    assert!(cookie.starts_with(&format!("{SESSION_COOKIE}=;")));
    assert!(cookie.contains("Max-Age=0"));
    assert!(cookie.contains("Path=/"));
}

// --- Cookie header parsing ---

#[test]
fn credential_is_found_among_other_cookies() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("theme=dark; bssaj_session=tok123; locale=ja"),
    );
    assert_eq!(credential_from_headers(&headers), Some("tok123".to_string()));
}

#[test]
fn missing_cookie_header_yields_no_credential() {
    let headers = HeaderMap::new();
    assert_eq!(credential_from_headers(&headers), None);
}

#[test]
fn unrelated_cookies_yield_no_credential() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("theme=dark; bssaj_session_old=tok123"),
    );
    assert_eq!(credential_from_headers(&headers), None);
}
