use super::*;
use crate::net::types::UploadedImage;

fn filled_form() -> ProjectForm {
    ProjectForm {
        title: "Portfolio".to_owned(),
        tagline: "Fast and small".to_owned(),
        tags: "rust, wasm".to_owned(),
        link: "https://example.com".to_owned(),
        repo: "https://github.com/asha/portfolio".to_owned(),
    }
}

#[test]
fn form_fields_include_every_text_field_in_api_order() {
    let fields = project_form_fields(&filled_form()).expect("valid");
    let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["title", "tagline", "tags", "link", "repo"]);
}

#[test]
fn form_fields_send_tags_verbatim() {
    let fields = project_form_fields(&filled_form()).expect("valid");
    let tags = fields.iter().find(|(name, _)| *name == "tags").expect("tags field");
    assert_eq!(tags.1, "rust, wasm");
}

#[test]
fn every_field_is_required() {
    for missing in ["title", "tagline", "tags", "link", "repo"] {
        let mut form = filled_form();
        match missing {
            "title" => form.title.clear(),
            "tagline" => form.tagline.clear(),
            "tags" => form.tags.clear(),
            "link" => form.link.clear(),
            _ => form.repo.clear(),
        }
        assert!(project_form_fields(&form).is_err(), "{missing} should be required");
    }
}

#[test]
fn from_project_joins_tags_for_editing() {
    let project = Project {
        id: "p1".to_owned(),
        title: "Portfolio".to_owned(),
        tagline: "Fast".to_owned(),
        tags: vec!["rust".to_owned(), "wasm".to_owned()],
        link: "https://a".to_owned(),
        repo: "https://b".to_owned(),
        image: Some(UploadedImage { url: "https://img".to_owned() }),
    };
    let form = ProjectForm::from_project(&project);
    assert_eq!(form.tags, "rust, wasm");
    assert_eq!(form.title, "Portfolio");
}
