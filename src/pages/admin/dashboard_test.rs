use super::*;

#[test]
fn profile_form_requires_name_and_email() {
    assert_eq!(validate_profile_form("", "a@b.com"), Err("Name is required".to_owned()));
    assert_eq!(validate_profile_form("Asha", " "), Err("Email is required".to_owned()));
}

#[test]
fn profile_form_trims_values() {
    let payload = validate_profile_form(" Asha ", " asha@example.com ").expect("valid");
    assert_eq!(payload.name, "Asha");
    assert_eq!(payload.email, "asha@example.com");
}

#[test]
fn password_form_requires_all_three_fields() {
    assert!(validate_password_form("", "new", "new").is_err());
    assert!(validate_password_form("old", "", "new").is_err());
    assert!(validate_password_form("old", "new", "").is_err());
}

#[test]
fn password_form_rejects_mismatched_confirmation() {
    assert_eq!(
        validate_password_form("old", "new-1", "new-2"),
        Err("New password and confirm password must match".to_owned())
    );
}

#[test]
fn password_form_accepts_matching_passwords() {
    let payload = validate_password_form("old", "new", "new").expect("valid");
    assert_eq!(payload.current_password, "old");
    assert_eq!(payload.new_password, "new");
    assert_eq!(payload.confirm_password, "new");
}
