//! Access-control decisions for protected routes.
//!
//! DESIGN
//! ======
//! `decide` is a pure function from (session state, requested path, required
//! role) to a decision; navigation side effects live in the `RouteGuard`
//! component. Keeping the decision pure makes the whole table testable
//! without mounting a UI.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::auth::AuthState;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_PREFIX: &str = "/admin";

/// Where a signed-in administrator lands after login when no origin path was
/// carried through the redirect.
pub const DEFAULT_POST_LOGIN_PATH: &str = "/admin/dashboard";

/// Outcome of evaluating a protected route against the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    /// The session is still bootstrapping; render a neutral placeholder and
    /// make no redirect decision yet.
    Checking,
    /// All checks passed; render the protected subtree.
    Granted,
    /// No user; go to the login page, carrying the originally requested path.
    ToLogin { from: String },
    /// A user is present but lacks the required scope; go home.
    ToHome,
}

/// Evaluate a protected route.
///
/// Both the admin-area check and the explicit required-role check run; if
/// either fails the result is `ToHome`. There is no partial admission.
pub fn decide(auth: &AuthState, path: &str, required_role: Option<&str>) -> AccessDecision {
    if auth.loading {
        return AccessDecision::Checking;
    }
    let Some(user) = &auth.user else {
        return AccessDecision::ToLogin { from: path.to_owned() };
    };
    if path.starts_with(ADMIN_PREFIX) && user.role != "admin" {
        return AccessDecision::ToHome;
    }
    if let Some(role) = required_role
        && user.role != role
    {
        return AccessDecision::ToHome;
    }
    AccessDecision::Granted
}

/// The navigation target a decision implies, if any.
pub fn redirect_target(decision: &AccessDecision) -> Option<String> {
    match decision {
        AccessDecision::ToLogin { from } => Some(login_redirect(from)),
        AccessDecision::ToHome => Some(HOME_PATH.to_owned()),
        AccessDecision::Checking | AccessDecision::Granted => None,
    }
}

/// Build the login URL, preserving the originally requested path so a
/// successful login can return there.
pub fn login_redirect(from: &str) -> String {
    if from.is_empty() || from == LOGIN_PATH {
        LOGIN_PATH.to_owned()
    } else {
        format!("{LOGIN_PATH}?from={from}")
    }
}

/// Where to navigate after a successful login. Only same-site paths are
/// honored; anything else falls back to the admin dashboard.
pub fn post_login_target(from: Option<&str>) -> String {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => DEFAULT_POST_LOGIN_PATH.to_owned(),
    }
}
