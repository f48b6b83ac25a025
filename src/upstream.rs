use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;
use thiserror::Error;

use crate::models::DirectoryUser;

/// AuthBackendError
///
/// Failures of upstream credential verification. `InvalidCredentials` maps to
/// a 401 at the login endpoint; `Upstream` maps to a 502 since the portal
/// cannot tell whether the credentials were good.
#[derive(Debug, Error)]
pub enum AuthBackendError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("upstream auth service error: {0}")]
    Upstream(String),
}

/// AuthBackend
///
/// Abstract contract for credential verification. The portal never stores or
/// checks passwords itself; it forwards the pair to the upstream BSSAJ API and
/// only mints a session once the upstream confirms the identity. The trait
/// object form lets tests swap in `MockAuthBackend` without touching handlers.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Verifies an email/password pair and returns the directory record of the
    /// identity on success.
    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<DirectoryUser, AuthBackendError>;
}

/// AuthBackendState
///
/// The concrete type used to share the verification seam across the
/// application state.
pub type AuthBackendState = Arc<dyn AuthBackend>;

/// HttpAuthBackend
///
/// Production implementation calling the upstream REST API over HTTPS.
#[derive(Clone)]
pub struct HttpAuthBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthBackend {
    /// Builds the client against the configured upstream base URL. A trailing
    /// slash on the base URL is tolerated.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl AuthBackend for HttpAuthBackend {
    /// verify_credentials
    ///
    /// POSTs the pair to `{base}/auth/login`. The upstream answers 200 with the
    /// directory record, or 401/403 for a bad pair; anything else is treated
    /// as an upstream fault, never as a credential verdict.
    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<DirectoryUser, AuthBackendError> {
        let response = self
            .client
            .post(format!("{}/auth/login", self.base_url))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AuthBackendError::Upstream(e.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(AuthBackendError::InvalidCredentials)
            }
            status if status.is_success() => response
                .json::<DirectoryUser>()
                .await
                .map_err(|e| AuthBackendError::Upstream(e.to_string())),
            status => Err(AuthBackendError::Upstream(format!(
                "unexpected status {status}"
            ))),
        }
    }
}

/// MockAuthBackend
///
/// In-memory implementation for tests: a fixed set of known email/password
/// pairs and the directory record each resolves to.
#[derive(Default)]
pub struct MockAuthBackend {
    users: Vec<(String, String, DirectoryUser)>,
}

impl MockAuthBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a credential pair the mock will accept.
    pub fn with_user(mut self, email: &str, password: &str, user: DirectoryUser) -> Self {
        self.users.push((email.to_string(), password.to_string(), user));
        self
    }
}

#[async_trait]
impl AuthBackend for MockAuthBackend {
    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<DirectoryUser, AuthBackendError> {
        self.users
            .iter()
            .find(|(e, p, _)| e == email && p == password)
            .map(|(_, _, user)| user.clone())
            .ok_or(AuthBackendError::InvalidCredentials)
    }
}
