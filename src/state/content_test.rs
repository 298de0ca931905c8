use super::*;

fn skill(name: &str) -> Skill {
    Skill {
        id: format!("id-{name}"),
        name: name.to_owned(),
        level: "80".to_owned(),
    }
}

#[test]
fn slots_start_pending_and_empty() {
    let state = ContentState::default();
    assert!(state.skills.pending());
    assert!(!state.skills.failed());
    assert!(state.skills.value.is_empty());
    assert!(state.hero.value.is_none());
}

#[test]
fn resolve_success_stores_value_and_settles() {
    let mut slot = SectionSlot::<Vec<Skill>>::default();
    slot.resolve(Ok(vec![skill("rust")]));
    assert!(!slot.pending());
    assert!(!slot.failed());
    assert_eq!(slot.value.len(), 1);
}

#[test]
fn resolve_failure_records_error_and_settles() {
    let mut slot = SectionSlot::<Vec<Skill>>::default();
    slot.resolve(Err("server error 503".to_owned()));
    assert!(!slot.pending());
    assert!(slot.failed());
    assert_eq!(slot.error.as_deref(), Some("server error 503"));
    assert!(slot.value.is_empty());
}

#[test]
fn resolve_success_clears_a_previous_error() {
    let mut slot = SectionSlot::<Vec<Skill>>::default();
    slot.resolve(Err("server error 500".to_owned()));
    slot.resolve(Ok(vec![skill("wasm")]));
    assert!(!slot.failed());
    assert_eq!(slot.value[0].name, "wasm");
}

// One section's failure must leave every other section's data intact.
#[test]
fn sections_settle_independently_under_partial_failure() {
    let mut state = ContentState::default();

    state.skills.resolve(Ok(vec![skill("rust"), skill("wasm")]));
    state.services.resolve(Err("server error 502".to_owned()));
    state.social.resolve(Ok(SocialLinks {
        github: "https://github.com/asha".to_owned(),
        ..SocialLinks::default()
    }));

    assert_eq!(state.skills.value.len(), 2);
    assert!(!state.skills.failed());

    assert!(state.services.failed());
    assert!(state.services.value.is_empty());

    assert_eq!(state.social.value.github, "https://github.com/asha");

    // Sections that have not settled yet are still pending, not failed.
    assert!(state.projects.pending());
    assert!(!state.projects.failed());
}
