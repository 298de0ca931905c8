use super::*;
use crate::net::types::User;

fn with_role(role: &str) -> AuthState {
    AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            name: "Asha".to_owned(),
            email: "asha@example.com".to_owned(),
            role: role.to_owned(),
        }),
        loading: false,
    }
}

fn anonymous() -> AuthState {
    AuthState { user: None, loading: false }
}

fn checking() -> AuthState {
    AuthState::default()
}

// =============================================================
// Decision table
// =============================================================

#[test]
fn loading_session_is_checking_regardless_of_target() {
    assert_eq!(decide(&checking(), "/admin", Some("admin")), AccessDecision::Checking);
    assert_eq!(decide(&checking(), "/", None), AccessDecision::Checking);
}

#[test]
fn anonymous_user_is_sent_to_login_with_origin() {
    assert_eq!(
        decide(&anonymous(), "/admin", Some("admin")),
        AccessDecision::ToLogin { from: "/admin".to_owned() }
    );
    assert_eq!(
        decide(&anonymous(), "/admin/projects", Some("admin")),
        AccessDecision::ToLogin { from: "/admin/projects".to_owned() }
    );
}

#[test]
fn wrong_role_in_admin_area_is_sent_home() {
    assert_eq!(decide(&with_role("editor"), "/admin", Some("admin")), AccessDecision::ToHome);
}

#[test]
fn admin_area_requires_admin_even_without_explicit_role() {
    assert_eq!(decide(&with_role("editor"), "/admin/skills", None), AccessDecision::ToHome);
}

#[test]
fn explicit_role_mismatch_outside_admin_area_is_sent_home() {
    assert_eq!(decide(&with_role("admin"), "/reports", Some("editor")), AccessDecision::ToHome);
}

#[test]
fn matching_role_in_admin_area_is_granted() {
    assert_eq!(decide(&with_role("admin"), "/admin", Some("admin")), AccessDecision::Granted);
    assert_eq!(
        decide(&with_role("admin"), "/admin/projects", Some("admin")),
        AccessDecision::Granted
    );
}

#[test]
fn signed_in_user_without_requirements_is_granted() {
    assert_eq!(decide(&with_role("editor"), "/reports", None), AccessDecision::Granted);
}

// Either failing check wins; there is no partial admission.
#[test]
fn tie_break_prefers_denial() {
    assert_eq!(decide(&with_role("editor"), "/admin", Some("editor")), AccessDecision::ToHome);
}

// =============================================================
// Redirect targets
// =============================================================

#[test]
fn redirect_target_for_anonymous_preserves_origin() {
    let decision = decide(&anonymous(), "/admin/hero", Some("admin"));
    assert_eq!(redirect_target(&decision).as_deref(), Some("/login?from=/admin/hero"));
}

#[test]
fn redirect_target_for_wrong_role_is_home() {
    let decision = decide(&with_role("editor"), "/admin", Some("admin"));
    assert_eq!(redirect_target(&decision).as_deref(), Some("/"));
}

#[test]
fn granted_and_checking_have_no_redirect() {
    assert_eq!(redirect_target(&AccessDecision::Granted), None);
    assert_eq!(redirect_target(&AccessDecision::Checking), None);
}

#[test]
fn login_redirect_skips_empty_or_circular_origins() {
    assert_eq!(login_redirect(""), "/login");
    assert_eq!(login_redirect("/login"), "/login");
    assert_eq!(login_redirect("/admin"), "/login?from=/admin");
}

// =============================================================
// Post-login return
// =============================================================

#[test]
fn post_login_target_honors_same_site_origin() {
    assert_eq!(post_login_target(Some("/admin/projects")), "/admin/projects");
}

#[test]
fn post_login_target_defaults_to_dashboard() {
    assert_eq!(post_login_target(None), "/admin/dashboard");
    assert_eq!(post_login_target(Some("")), "/admin/dashboard");
}

#[test]
fn post_login_target_rejects_external_urls() {
    assert_eq!(post_login_target(Some("https://evil.example")), "/admin/dashboard");
    assert_eq!(post_login_target(Some("//evil.example")), "/admin/dashboard");
}
