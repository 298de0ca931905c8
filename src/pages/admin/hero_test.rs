use super::*;

fn filled_form() -> HeroForm {
    HeroForm {
        name: "Asha".to_owned(),
        title: "Full-stack Engineer".to_owned(),
        description: "I build fast websites.".to_owned(),
        skills: "Rust, WASM, SQL".to_owned(),
        stats: r#"[{"label":"Years","value":"6+"}]"#.to_owned(),
    }
}

#[test]
fn skills_are_sent_as_a_json_list() {
    let fields = hero_form_fields(&filled_form()).expect("valid");
    let skills = fields.iter().find(|(name, _)| *name == "skills").expect("skills");
    assert_eq!(skills.1, r#"["Rust","WASM","SQL"]"#);
}

#[test]
fn stats_round_trip_through_validation() {
    let fields = hero_form_fields(&filled_form()).expect("valid");
    let stats = fields.iter().find(|(name, _)| *name == "stats").expect("stats");
    let parsed: Vec<HeroStat> = serde_json::from_str(&stats.1).expect("stats stay valid JSON");
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].label, "Years");
}

#[test]
fn empty_stats_input_becomes_an_empty_list() {
    let mut form = filled_form();
    form.stats = "   ".to_owned();
    let fields = hero_form_fields(&form).expect("valid");
    let stats = fields.iter().find(|(name, _)| *name == "stats").expect("stats");
    assert_eq!(stats.1, "[]");
}

#[test]
fn malformed_stats_json_is_rejected_before_any_request() {
    let mut form = filled_form();
    form.stats = "not json".to_owned();
    let err = hero_form_fields(&form).expect_err("invalid stats rejected");
    assert!(err.starts_with("Stats must be a JSON list"));
}

#[test]
fn name_title_description_are_required() {
    for missing in ["name", "title", "description"] {
        let mut form = filled_form();
        match missing {
            "name" => form.name.clear(),
            "title" => form.title.clear(),
            _ => form.description.clear(),
        }
        assert!(hero_form_fields(&form).is_err(), "{missing} should be required");
    }
}

#[test]
fn from_hero_prefills_editing_representation() {
    let hero = HeroContent {
        id: "h1".to_owned(),
        name: "Asha".to_owned(),
        title: "Engineer".to_owned(),
        description: "Hi".to_owned(),
        skills: vec!["Rust".to_owned(), "WASM".to_owned()],
        stats: vec![HeroStat { label: "Years".to_owned(), value: "6+".to_owned() }],
        image: None,
    };
    let form = HeroForm::from_hero(&hero);
    assert_eq!(form.skills, "Rust, WASM");
    let parsed: Vec<HeroStat> = serde_json::from_str(&form.stats).expect("stats JSON");
    assert_eq!(parsed, hero.stats);
}
