use super::*;

#[test]
fn user_decodes_mongo_style_id() {
    let user: User = serde_json::from_str(
        r#"{"_id":"64ffab","name":"Asha","email":"asha@example.com","role":"admin"}"#,
    )
    .expect("user decodes");
    assert_eq!(user.id, "64ffab");
    assert_eq!(user.role, "admin");
}

#[test]
fn identity_response_defaults_success_to_false() {
    let body: IdentityResponse = serde_json::from_str(r#"{"user":null}"#).expect("decodes");
    assert!(!body.success);
    assert!(body.user.is_none());
}

#[test]
fn login_response_converts_to_user() {
    let body: LoginResponse = serde_json::from_str(
        r#"{"_id":"u1","name":"Asha","email":"asha@example.com","role":"admin","message":"Login successful"}"#,
    )
    .expect("decodes");
    let user = body.into_user();
    assert_eq!(user.id, "u1");
    assert_eq!(user.email, "asha@example.com");
}

#[test]
fn project_tags_decode_from_array() {
    let project: Project = serde_json::from_str(
        r#"{"_id":"p1","title":"Site","tagline":"Fast","tags":["rust","wasm"],"link":"https://a","repo":"https://b"}"#,
    )
    .expect("decodes");
    assert_eq!(project.tags, vec!["rust", "wasm"]);
    assert!(project.image.is_none());
}

#[test]
fn project_tags_decode_from_comma_separated_string() {
    let project: Project = serde_json::from_str(
        r#"{"_id":"p1","title":"Site","tagline":"Fast","tags":"rust, wasm, ","link":"https://a","repo":"https://b"}"#,
    )
    .expect("decodes");
    assert_eq!(project.tags, vec!["rust", "wasm"]);
}

#[test]
fn project_tags_reject_non_string_entries() {
    let result = serde_json::from_str::<Project>(
        r#"{"_id":"p1","title":"Site","tagline":"Fast","tags":[1,2],"link":"https://a","repo":"https://b"}"#,
    );
    assert!(result.is_err());
}

#[test]
fn hero_skills_tolerate_missing_field() {
    let hero: HeroContent = serde_json::from_str(
        r#"{"_id":"h1","name":"Asha","title":"Engineer","description":"Builds things","image":{"url":"https://img"}}"#,
    )
    .expect("decodes");
    assert!(hero.skills.is_empty());
    assert!(hero.stats.is_empty());
    assert_eq!(hero.image.expect("image").url, "https://img");
}

#[test]
fn experience_points_decode_from_string() {
    let entry: ExperienceEntry = serde_json::from_str(
        r#"{"_id":"e1","role":"Dev","company":"Acme","period":"2022","points":"shipped, mentored"}"#,
    )
    .expect("decodes");
    assert_eq!(entry.points, vec!["shipped", "mentored"]);
}

#[test]
fn about_response_reads_about_cards_key() {
    let body: AboutResponse = serde_json::from_str(
        r#"{"success":true,"aboutCards":[{"_id":"a1","title":"Bio","text":"Hi"}]}"#,
    )
    .expect("decodes");
    assert_eq!(body.about_cards.len(), 1);
    assert_eq!(body.about_cards[0].title, "Bio");
}

#[test]
fn contact_info_response_reads_data_key() {
    let body: ContactInfoResponse = serde_json::from_str(
        r#"{"data":[{"_id":"c1","email":"a@b.com","phone":"123","location":"Pune","resume":null}]}"#,
    )
    .expect("decodes");
    assert_eq!(body.data[0].location, "Pune");
    assert!(body.data[0].resume.is_none());
}

#[test]
fn social_links_default_to_empty_strings() {
    let body: SocialResponse = serde_json::from_str(r#"{"socials":{"github":"https://gh"}}"#).expect("decodes");
    let socials = body.socials.expect("socials");
    assert_eq!(socials.github, "https://gh");
    assert_eq!(socials.x, "");
}

#[test]
fn contact_message_reads_created_at() {
    let message: ContactMessage = serde_json::from_str(
        r#"{"_id":"m1","name":"Vi","email":"v@e.com","subject":"Hi","message":"Nice site","rating":"5","createdAt":"2026-01-05T10:00:00Z"}"#,
    )
    .expect("decodes");
    assert_eq!(message.rating.as_deref(), Some("5"));
    assert_eq!(message.created_at.as_deref(), Some("2026-01-05T10:00:00Z"));
}

#[test]
fn password_payload_serializes_camel_case() {
    let payload = PasswordPayload {
        current_password: "old".to_owned(),
        new_password: "new".to_owned(),
        confirm_password: "new".to_owned(),
    };
    let json = serde_json::to_value(&payload).expect("serializes");
    assert_eq!(
        json,
        serde_json::json!({
            "currentPassword": "old",
            "newPassword": "new",
            "confirmPassword": "new"
        })
    );
}

// List refreshes replace local state wholesale, so a create/update/delete
// round-trip is visible purely through successive list payloads.
#[test]
fn crud_round_trip_is_reflected_by_successive_list_payloads() {
    let after_create: SkillsResponse =
        serde_json::from_str(r#"{"skills":[{"_id":"k1","name":"Rust","level":"80"}]}"#).expect("decodes");
    assert!(after_create.skills.iter().any(|s| s.id == "k1" && s.level == "80"));

    let after_update: SkillsResponse =
        serde_json::from_str(r#"{"skills":[{"_id":"k1","name":"Rust","level":"95"}]}"#).expect("decodes");
    assert!(after_update.skills.iter().any(|s| s.id == "k1" && s.level == "95"));

    let after_delete: SkillsResponse = serde_json::from_str(r#"{"skills":[]}"#).expect("decodes");
    assert!(!after_delete.skills.iter().any(|s| s.id == "k1"));
}

#[test]
fn mutation_response_tolerates_bare_body() {
    let body: MutationResponse = serde_json::from_str("{}").expect("decodes");
    assert!(!body.success);
    assert!(body.message.is_none());
}
