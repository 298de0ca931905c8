use super::*;

fn filled_form() -> ContactInfoForm {
    ContactInfoForm {
        email: "asha@example.com".to_owned(),
        phone: "+91 98765 43210".to_owned(),
        location: "Pune, India".to_owned(),
    }
}

#[test]
fn all_fields_are_required() {
    for missing in ["email", "phone", "location"] {
        let mut form = filled_form();
        match missing {
            "email" => form.email.clear(),
            "phone" => form.phone.clear(),
            _ => form.location.clear(),
        }
        assert!(contact_info_form_fields(&form).is_err(), "{missing} should be required");
    }
}

#[test]
fn fields_match_api_names() {
    let fields = contact_info_form_fields(&filled_form()).expect("valid");
    let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["email", "phone", "location"]);
}

#[test]
fn from_details_prefills_without_the_resume() {
    let details = ContactDetails {
        id: "c1".to_owned(),
        email: "a@b.com".to_owned(),
        phone: "123".to_owned(),
        location: "Pune".to_owned(),
        resume: Some("https://files/resume.pdf".to_owned()),
    };
    let form = ContactInfoForm::from_details(&details);
    assert_eq!(form.email, "a@b.com");
    // The stored resume URL is not an editable text field; uploading a new
    // file replaces it.
    assert_eq!(contact_info_form_fields(&form).expect("valid").len(), 3);
}
