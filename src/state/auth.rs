//! Auth-session state for the current visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<AuthState>` from the root `App`. Route guards and
//! user-aware components read it to coordinate login redirects and
//! identity-dependent rendering. Only the operations below mutate it:
//! `apply_bootstrap` (once, when the identity check settles), `set_user`
//! (explicit login), and `clear_user` (logout).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ApiError;
use crate::net::types::{IdentityResponse, User};

/// Authentication state tracking the current user and loading status.
///
/// `loading` starts `true` and flips to `false` exactly once, strictly after
/// the identity check settles; a full page load is the only way back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Settle the session from the identity check's outcome.
    ///
    /// A falsy success flag, a missing user, or any network failure all
    /// degrade to "anonymous" rather than surfacing an error: an anonymous
    /// visitor is a valid state for a public site. `loading` clears on every
    /// path.
    pub fn apply_bootstrap(&mut self, outcome: Result<IdentityResponse, ApiError>) {
        self.user = match outcome {
            Ok(body) if body.success => body.user,
            _ => None,
        };
        self.loading = false;
    }

    /// Replace the current user after an explicit login. Leaves `loading`
    /// untouched.
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Drop the current user after logout. Leaves `loading` untouched.
    pub fn clear_user(&mut self) {
        self.user = None;
    }

    /// Whether the signed-in user (if any) holds `role`.
    pub fn has_role(&self, role: &str) -> bool {
        self.user.as_ref().is_some_and(|user| user.role == role)
    }
}
