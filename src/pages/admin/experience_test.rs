use super::*;

fn filled_form() -> ExperienceForm {
    ExperienceForm {
        role: "Engineer".to_owned(),
        company: "Acme".to_owned(),
        period: "2021 - 2023".to_owned(),
        points: "shipped the thing, mentored two juniors".to_owned(),
    }
}

#[test]
fn points_are_split_into_a_list() {
    let payload = validate_experience_form(&filled_form()).expect("valid");
    assert_eq!(payload.points, vec!["shipped the thing", "mentored two juniors"]);
}

#[test]
fn every_field_is_required() {
    for missing in ["role", "company", "period", "points"] {
        let mut form = filled_form();
        match missing {
            "role" => form.role.clear(),
            "company" => form.company.clear(),
            "period" => form.period.clear(),
            _ => form.points.clear(),
        }
        assert!(validate_experience_form(&form).is_err(), "{missing} should be required");
    }
}

#[test]
fn from_entry_round_trips_points_for_editing() {
    let entry = ExperienceEntry {
        id: "e1".to_owned(),
        role: "Engineer".to_owned(),
        company: "Acme".to_owned(),
        period: "2021".to_owned(),
        points: vec!["a".to_owned(), "b".to_owned()],
    };
    let form = ExperienceForm::from_entry(&entry);
    assert_eq!(form.points, "a, b");
    let payload = validate_experience_form(&form).expect("valid");
    assert_eq!(payload.points, entry.points);
}
