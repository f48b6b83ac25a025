use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Request Payloads (Input Schemas) ---

/// LoginRequest
///
/// Input payload for opening a session (POST /api/auth/login). The password is
/// only forwarded to the upstream directory for verification and is never
/// persisted or logged by the portal.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct LoginRequest {
    #[schema(example = "admin@bssaj.org")]
    pub email: String,
    pub password: String,
}

// --- Session Schemas (Output) ---

/// SessionUser
///
/// The identity attached to an open session, as returned by the login and
/// introspection endpoints. This is the only user shape the dashboard frontend
/// sees from the portal.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    // Role claim string; one of the closed role enumeration.
    pub role: String,
}

/// ErrorBody
///
/// Minimal JSON error payload. The dashboard surfaces `message` directly in a
/// toast, so it stays human-readable and free of internal detail.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ErrorBody {
    pub message: String,
}

// --- Upstream Schemas (Internal Use) ---

/// DirectoryUser
///
/// Identity record as the upstream BSSAJ API returns it from credential
/// verification. Internal to the portal; it is mapped into `SessionUser`
/// before anything leaves the process.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DirectoryUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<DirectoryUser> for SessionUser {
    fn from(user: DirectoryUser) -> Self {
        SessionUser {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}
