use super::*;

fn filled_links() -> SocialLinks {
    SocialLinks {
        github: "https://github.com/asha".to_owned(),
        linkedin: "https://linkedin.com/in/asha".to_owned(),
        instagram: "https://instagram.com/asha".to_owned(),
        whatsapp: "https://wa.me/919876543210".to_owned(),
        x: "https://x.com/asha".to_owned(),
    }
}

#[test]
fn all_five_links_are_required() {
    for missing in ["github", "linkedin", "instagram", "whatsapp", "x"] {
        let mut links = filled_links();
        match missing {
            "github" => links.github.clear(),
            "linkedin" => links.linkedin.clear(),
            "instagram" => links.instagram.clear(),
            "whatsapp" => links.whatsapp.clear(),
            _ => links.x.clear(),
        }
        assert_eq!(
            validate_social_links(&links),
            Err("All 5 links are required".to_owned()),
            "{missing} should be required"
        );
    }
}

#[test]
fn complete_links_pass_and_are_trimmed() {
    let mut links = filled_links();
    links.x = "  https://x.com/asha  ".to_owned();
    let payload = validate_social_links(&links).expect("valid");
    assert_eq!(payload.x, "https://x.com/asha");
}
