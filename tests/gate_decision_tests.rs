use bssaj_portal::access::{GateDecision, Role, SessionState, evaluate};

// --- Helpers ---

fn authed(role: &str) -> SessionState {
    SessionState::Authenticated {
        role: role.to_string(),
    }
}

fn to_login_with(next: &str) -> GateDecision {
    GateDecision::ToLogin {
        next: Some(next.to_string()),
    }
}

// --- Root path dispatch ---

#[test]
fn root_without_credential_redirects_to_login() {
    assert_eq!(
        evaluate("/", &SessionState::Missing),
        GateDecision::ToLogin { next: None }
    );
}

#[test]
fn root_with_credential_redirects_to_landing() {
    assert_eq!(evaluate("/", &authed("ADMIN")), GateDecision::ToLanding);
}

#[test]
fn root_dispatch_is_decided_by_presence_not_validity() {
    // An undecodable cookie still counts as "present" at the root path; the
    // landing page then bounces the bad session to login on the next hop.
    assert_eq!(evaluate("/", &SessionState::Invalid), GateDecision::ToLanding);
}

// --- Unauthenticated navigation ---

#[test]
fn protected_path_without_credential_carries_next() {
    assert_eq!(
        evaluate("/agencies", &SessionState::Missing),
        to_login_with("/agencies")
    );
}

#[test]
fn malformed_credential_behaves_like_missing_credential() {
    for path in ["/members", "/events/42", "/payments"] {
        assert_eq!(
            evaluate(path, &SessionState::Invalid),
            evaluate(path, &SessionState::Missing),
            "invalid and missing must agree on {path}"
        );
    }
}

#[test]
fn auth_pages_pass_through_without_credential() {
    for state in [SessionState::Missing, SessionState::Invalid] {
        assert_eq!(evaluate("/login", &state), GateDecision::Allow);
        assert_eq!(evaluate("/forgot-password", &state), GateDecision::Allow);
    }
}

// --- Authenticated navigation ---

#[test]
fn authenticated_login_redirects_to_landing_never_passes() {
    for role in ["SUPER_ADMIN", "ADMIN", "AGENCY", "MEMBER"] {
        assert_eq!(evaluate("/login", &authed(role)), GateDecision::ToLanding);
    }
}

#[test]
fn common_pages_open_to_any_authenticated_identity() {
    // Including an identity whose role string is outside the closed set: it is
    // still authenticated, just absent from the role table.
    for role in ["SUPER_ADMIN", "ADMIN", "AGENCY", "MEMBER", "GUEST"] {
        assert_eq!(evaluate("/dashboard", &authed(role)), GateDecision::Allow);
        assert_eq!(evaluate("/profile", &authed(role)), GateDecision::Allow);
    }
}

#[test]
fn role_with_agencies_prefix_reaches_agency_subpaths() {
    assert_eq!(evaluate("/agencies/123", &authed("AGENCY")), GateDecision::Allow);
}

#[test]
fn path_outside_role_table_falls_back_to_root() {
    // /settings belongs to SUPER_ADMIN only.
    assert_eq!(evaluate("/settings", &authed("AGENCY")), GateDecision::ToRoot);
    assert_eq!(evaluate("/settings", &authed("ADMIN")), GateDecision::ToRoot);
    assert_eq!(evaluate("/settings", &authed("SUPER_ADMIN")), GateDecision::Allow);
}

#[test]
fn unknown_role_is_denied_outside_common_pages() {
    assert_eq!(evaluate("/members", &authed("GUEST")), GateDecision::ToRoot);
    assert_eq!(evaluate("/agencies", &authed("")), GateDecision::ToRoot);
}

#[test]
fn member_role_is_limited_to_its_table_entries() {
    assert_eq!(evaluate("/certifications", &authed("MEMBER")), GateDecision::Allow);
    assert_eq!(evaluate("/payments", &authed("MEMBER")), GateDecision::ToRoot);
    assert_eq!(evaluate("/users", &authed("MEMBER")), GateDecision::ToRoot);
}

#[test]
fn super_admin_reaches_every_dashboard_section() {
    for section in [
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
    ] {
        assert_eq!(
            evaluate(section, &authed("SUPER_ADMIN")),
            GateDecision::Allow,
            "SUPER_ADMIN must reach {section}"
        );
    }
}

#[test]
fn sibling_routes_sharing_a_prefix_also_match() {
    // Matching is plain prefix matching on the raw path; a sibling route that
    // shares a table prefix matches too. Pinned here because the deployed
    // behavior is intentionally kept as-is.
    assert_eq!(evaluate("/membership", &authed("ADMIN")), GateDecision::Allow);
}

// --- Assets ---

#[test]
fn bundle_assets_served_regardless_of_session() {
    for state in [
        SessionState::Missing,
        SessionState::Invalid,
        authed("MEMBER"),
    ] {
        assert_eq!(evaluate("/assets/app.js", &state), GateDecision::Allow);
        assert_eq!(evaluate("/favicon.ico", &state), GateDecision::Allow);
    }
}

// --- Role enumeration ---

#[test]
fn role_parse_accepts_only_the_closed_set() {
    assert_eq!(Role::parse("SUPER_ADMIN"), Some(Role::SuperAdmin));
    assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
    assert_eq!(Role::parse("AGENCY"), Some(Role::Agency));
    assert_eq!(Role::parse("MEMBER"), Some(Role::Member));
    assert_eq!(Role::parse("admin"), None);
    assert_eq!(Role::parse("ROOT"), None);
}

#[test]
fn role_string_forms_round_trip() {
    for role in [Role::SuperAdmin, Role::Admin, Role::Agency, Role::Member] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}
