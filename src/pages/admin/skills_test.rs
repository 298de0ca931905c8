use super::*;

#[test]
fn both_fields_are_required() {
    let form = SkillForm { name: String::new(), level: "90".to_owned() };
    assert_eq!(validate_skill_form(&form), Err("Name is required".to_owned()));

    let form = SkillForm { name: "Rust".to_owned(), level: "  ".to_owned() };
    assert_eq!(validate_skill_form(&form), Err("Level is required".to_owned()));
}

#[test]
fn level_must_be_a_percentage() {
    for bad in ["abc", "-5", "101", "12.5"] {
        let form = SkillForm { name: "Rust".to_owned(), level: bad.to_owned() };
        assert_eq!(
            validate_skill_form(&form),
            Err("Level must be a number between 0 and 100".to_owned()),
            "level {bad} should be rejected"
        );
    }
}

#[test]
fn level_tolerates_a_trailing_percent_sign() {
    let form = SkillForm { name: "Rust".to_owned(), level: "90%".to_owned() };
    let payload = validate_skill_form(&form).expect("valid");
    assert_eq!(payload.level, "90");
}

#[test]
fn boundary_levels_are_accepted() {
    for ok in ["0", "100"] {
        let form = SkillForm { name: "Rust".to_owned(), level: ok.to_owned() };
        assert!(validate_skill_form(&form).is_ok(), "level {ok} should be accepted");
    }
}
