use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

/// Default page an authenticated identity lands on.
pub const DEFAULT_LANDING: &str = "/dashboard";

/// Pages reachable *only without* a session (the auth flow itself).
/// An authenticated identity requesting one of these is bounced to the
/// landing page instead.
const AUTH_PAGES: &[&str] = &["/login", "/forgot-password", "/reset-password"];

/// Pages available to any authenticated identity regardless of role.
const COMMON_PAGES: &[&str] = &["/dashboard", "/profile"];

/// Role
///
/// The closed enumeration of identity classes the dashboard recognizes.
/// The wire form is the SCREAMING_SNAKE_CASE string carried in the session
/// credential's `role` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Role {
    SuperAdmin,
    Admin,
    Agency,
    Member,
}

impl Role {
    /// Parses the claim string form of a role. Returns `None` for anything
    /// outside the closed set; the gate treats such identities as authenticated
    /// but without any table entry.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "SUPER_ADMIN" => Some(Role::SuperAdmin),
            "ADMIN" => Some(Role::Admin),
            "AGENCY" => Some(Role::Agency),
            "MEMBER" => Some(Role::Member),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Admin => "ADMIN",
            Role::Agency => "AGENCY",
            Role::Member => "MEMBER",
        }
    }

    /// allowed_prefixes
    ///
    /// The static role→route table. Each role maps to the path prefixes of the
    /// dashboard sections it may open. The table is fixed at deployment time;
    /// matching is plain prefix matching on the raw request path (so sibling
    /// routes sharing a prefix match too — this mirrors the deployed behavior
    /// and is intentionally left as-is).
    pub fn allowed_prefixes(&self) -> &'static [&'static str] {
        match self {
            Role::SuperAdmin => &[
                "/users",
                "/members",
                "/agencies",
                "/committees",
                "/events",
                "/news",
                "/blogs",
                "/banners",
                "/gallery",
                "/jobs",
                "/scholarships",
                "/certifications",
                "/payments",
                "/settings",
            ],
            Role::Admin => &[
                "/members",
                "/agencies",
                "/committees",
                "/events",
                "/news",
                "/blogs",
                "/banners",
                "/gallery",
                "/jobs",
                "/scholarships",
                "/certifications",
                "/payments",
            ],
            Role::Agency => &["/agencies", "/members", "/certifications"],
            Role::Member => &["/certifications"],
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SessionState
///
/// The gate's view of the request's credential, produced by the middleware
/// before evaluation. `Invalid` covers every decode failure — malformed token,
/// bad signature, expired — which the gate treats as "no valid session" rather
/// than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No session cookie on the request.
    Missing,
    /// A cookie is present but its credential does not decode.
    Invalid,
    /// A validated credential; `role` is the raw claim string.
    Authenticated { role: String },
}

/// GateDecision
///
/// Outcome of one gate evaluation. The caller turns redirect variants into
/// HTTP 307 responses; `Allow` lets the navigation through to the page tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    /// Redirect to the login page, optionally carrying the originally
    /// requested path for post-login return.
    ToLogin { next: Option<String> },
    /// Redirect to the default authenticated landing page.
    ToLanding,
    /// Fallback deny: redirect to the root route.
    ToRoot,
}

fn is_asset(path: &str) -> bool {
    path.starts_with("/assets/") || path.starts_with("/static/") || path == "/favicon.ico"
}

fn is_auth_page(path: &str) -> bool {
    AUTH_PAGES.iter().any(|p| path.starts_with(p))
}

fn is_common_page(path: &str) -> bool {
    COMMON_PAGES.iter().any(|p| path.starts_with(p))
}

/// evaluate
///
/// The route access gate: decides, for a single navigation, whether to let it
/// proceed or where to redirect it. Pure and deterministic — no clock, no
/// network, no credential mutation — so every rule below is directly testable.
///
/// Evaluation order:
/// 1. Bundle assets are always served; the login screen itself ships in them.
/// 2. The root path only dispatches: to login when no credential is present,
///    to the landing page otherwise. Presence, not validity, decides here.
/// 3. Without a usable credential only the auth pages are reachable; any other
///    path redirects to login carrying the original path as `next`.
/// 4. An authenticated identity is bounced off the auth pages to the landing
///    page, never allowed to re-enter the login flow.
/// 5. Common pages are open to every authenticated identity.
/// 6. Everything else requires a role table entry whose prefix matches the
///    path; otherwise the navigation falls back to the root route.
pub fn evaluate(path: &str, session: &SessionState) -> GateDecision {
    if is_asset(path) {
        return GateDecision::Allow;
    }

    if path == "/" {
        return match session {
            SessionState::Missing => GateDecision::ToLogin { next: None },
            _ => GateDecision::ToLanding,
        };
    }

    let role = match session {
        // A credential that fails to decode behaves exactly like a missing one.
        SessionState::Missing | SessionState::Invalid => {
            return if is_auth_page(path) {
                GateDecision::Allow
            } else {
                GateDecision::ToLogin {
                    next: Some(path.to_string()),
                }
            };
        }
        SessionState::Authenticated { role } => role,
    };

    if is_auth_page(path) {
        return GateDecision::ToLanding;
    }

    if is_common_page(path) {
        return GateDecision::Allow;
    }

    // A role outside the closed set has no table entry and is denied the same
    // way as a role whose entry lacks the prefix.
    let allowed = Role::parse(role)
        .map(|r| r.allowed_prefixes().iter().any(|p| path.starts_with(p)))
        .unwrap_or(false);

    if allowed {
        GateDecision::Allow
    } else {
        GateDecision::ToRoot
    }
}
