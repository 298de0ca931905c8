use super::*;

#[test]
fn validate_register_input_accepts_complete_form() {
    let payload = validate_register_input(" Asha ", " asha@example.com ", "hunter2").expect("valid");
    assert_eq!(payload.name, "Asha");
    assert_eq!(payload.email, "asha@example.com");
}

#[test]
fn validate_register_input_requires_every_field() {
    assert!(validate_register_input("", "a@b.com", "pw").is_err());
    assert!(validate_register_input("Asha", "", "pw").is_err());
    assert!(validate_register_input("Asha", "a@b.com", "").is_err());
}
