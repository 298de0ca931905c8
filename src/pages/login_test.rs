use super::*;

#[test]
fn validate_login_input_trims_email() {
    let payload = validate_login_input("  asha@example.com  ", "hunter2").expect("valid");
    assert_eq!(payload.email, "asha@example.com");
    assert_eq!(payload.password, "hunter2");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("", "hunter2"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_login_input("asha@example.com", ""),
        Err("Enter both email and password.")
    );
    assert_eq!(validate_login_input("   ", ""), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let payload = validate_login_input("a@b.com", "  spaces kept  ").expect("valid");
    assert_eq!(payload.password, "  spaces kept  ");
}
