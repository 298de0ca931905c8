use super::*;

fn filled_form() -> TestimonialForm {
    TestimonialForm {
        name: "Vi".to_owned(),
        title: "CTO, Acme".to_owned(),
        quote: "Shipped ahead of schedule.".to_owned(),
    }
}

#[test]
fn form_fields_match_api_names() {
    let fields = testimonial_form_fields(&filled_form()).expect("valid");
    let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["name", "title", "quote"]);
}

#[test]
fn all_text_fields_are_required() {
    for missing in ["name", "title", "quote"] {
        let mut form = filled_form();
        match missing {
            "name" => form.name.clear(),
            "title" => form.title.clear(),
            _ => form.quote.clear(),
        }
        assert!(testimonial_form_fields(&form).is_err(), "{missing} should be required");
    }
}

#[test]
fn values_are_trimmed() {
    let mut form = filled_form();
    form.quote = "  Great work.  ".to_owned();
    let fields = testimonial_form_fields(&form).expect("valid");
    let quote = fields.iter().find(|(name, _)| *name == "quote").expect("quote");
    assert_eq!(quote.1, "Great work.");
}
