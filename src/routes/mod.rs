/// Router Module Index
///
/// Organizes the portal's routing into access-segregated modules so each
/// surface carries its own protection explicitly:
///
/// - `public`: unauthenticated service endpoints (health probe).
/// - `session`: the session-cookie lifecycle API consumed by the dashboard.
/// - `pages`: the client-rendered dashboard bundle, wrapped in the route
///   access gate middleware.
pub mod public;

pub mod session;

pub mod pages;
