use super::*;

#[test]
fn title_and_text_are_required() {
    assert_eq!(validate_about_form("", "Hi"), Err("Title is required".to_owned()));
    assert_eq!(validate_about_form("Bio", "  "), Err("Text is required".to_owned()));
}

#[test]
fn payload_is_trimmed() {
    let payload = validate_about_form(" Bio ", " I build things. ").expect("valid");
    assert_eq!(payload.title, "Bio");
    assert_eq!(payload.text, "I build things.");
}
