use super::*;

fn admin() -> User {
    User {
        id: "u1".to_owned(),
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        role: "admin".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn auth_state_starts_loading_with_no_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
}

// =============================================================
// Bootstrap settles exactly once, for every outcome class
// =============================================================

#[test]
fn bootstrap_success_sets_user_and_clears_loading() {
    let mut state = AuthState::default();
    state.apply_bootstrap(Ok(IdentityResponse { success: true, user: Some(admin()) }));
    assert!(!state.loading);
    assert_eq!(state.user, Some(admin()));
}

#[test]
fn bootstrap_with_falsy_success_flag_degrades_to_anonymous() {
    let mut state = AuthState::default();
    state.apply_bootstrap(Ok(IdentityResponse { success: false, user: Some(admin()) }));
    assert!(!state.loading);
    assert!(state.user.is_none());
}

#[test]
fn bootstrap_with_missing_user_degrades_to_anonymous() {
    let mut state = AuthState::default();
    state.apply_bootstrap(Ok(IdentityResponse { success: true, user: None }));
    assert!(!state.loading);
    assert!(state.user.is_none());
}

#[test]
fn bootstrap_network_failure_degrades_to_anonymous() {
    let mut state = AuthState::default();
    state.apply_bootstrap(Err(ApiError::transport("connection refused")));
    assert!(!state.loading);
    assert!(state.user.is_none());
}

#[test]
fn loading_never_reverts_after_settling() {
    let mut state = AuthState::default();
    state.apply_bootstrap(Err(ApiError::transport("offline")));
    assert!(!state.loading);

    // Later session mutations must not re-enter the loading phase.
    state.set_user(admin());
    assert!(!state.loading);
    state.clear_user();
    assert!(!state.loading);
}

// =============================================================
// Explicit login / logout
// =============================================================

#[test]
fn set_user_replaces_identity_without_touching_loading() {
    let mut state = AuthState::default();
    state.set_user(admin());
    assert_eq!(state.user, Some(admin()));
    assert!(state.loading);
}

#[test]
fn clear_user_drops_identity() {
    let mut state = AuthState { user: Some(admin()), loading: false };
    state.clear_user();
    assert!(state.user.is_none());
}

#[test]
fn has_role_matches_exact_role_string() {
    let state = AuthState { user: Some(admin()), loading: false };
    assert!(state.has_role("admin"));
    assert!(!state.has_role("editor"));
    assert!(!AuthState::default().has_role("admin"));
}
