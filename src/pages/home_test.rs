use super::*;

fn filled_form() -> ContactForm {
    ContactForm {
        name: " Vi ".to_owned(),
        email: "vi@example.com".to_owned(),
        subject: "Hello".to_owned(),
        message: "Great site".to_owned(),
        rating: "5".to_owned(),
    }
}

#[test]
fn validate_contact_form_trims_and_accepts_complete_input() {
    let payload = validate_contact_form(&filled_form()).expect("valid");
    assert_eq!(payload.name, "Vi");
    assert_eq!(payload.rating, "5");
}

#[test]
fn validate_contact_form_requires_each_field() {
    for blank in ["name", "email", "subject", "message"] {
        let mut form = filled_form();
        match blank {
            "name" => form.name.clear(),
            "email" => form.email.clear(),
            "subject" => form.subject.clear(),
            _ => form.message.clear(),
        }
        let err = validate_contact_form(&form).expect_err("missing field rejected");
        assert!(err.ends_with("is required"), "unexpected message: {err}");
    }
}

#[test]
fn validate_contact_form_allows_missing_rating() {
    let mut form = filled_form();
    form.rating.clear();
    let payload = validate_contact_form(&form).expect("rating is optional");
    assert_eq!(payload.rating, "");
}
