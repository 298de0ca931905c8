use super::*;

#[test]
fn title_and_description_are_required() {
    let form = ServiceForm {
        title: String::new(),
        icon: "🛠".to_owned(),
        desc: "Web apps".to_owned(),
    };
    assert_eq!(validate_service_form(&form), Err("Title is required".to_owned()));

    let form = ServiceForm {
        title: "Development".to_owned(),
        icon: String::new(),
        desc: "  ".to_owned(),
    };
    assert_eq!(validate_service_form(&form), Err("Description is required".to_owned()));
}

#[test]
fn icon_is_optional() {
    let form = ServiceForm {
        title: "Development".to_owned(),
        icon: String::new(),
        desc: "Web apps".to_owned(),
    };
    let payload = validate_service_form(&form).expect("valid without icon");
    assert_eq!(payload.icon, "");
}

#[test]
fn payload_is_trimmed() {
    let form = ServiceForm {
        title: " Development ".to_owned(),
        icon: " 🛠 ".to_owned(),
        desc: " Web apps ".to_owned(),
    };
    let payload = validate_service_form(&form).expect("valid");
    assert_eq!(payload.title, "Development");
    assert_eq!(payload.icon, "🛠");
    assert_eq!(payload.desc, "Web apps");
}

#[test]
fn from_service_prefills_the_form() {
    let service = Service {
        id: "s1".to_owned(),
        title: "Design".to_owned(),
        icon: "🎨".to_owned(),
        desc: "Interfaces".to_owned(),
    };
    assert_eq!(
        ServiceForm::from_service(&service),
        ServiceForm {
            title: "Design".to_owned(),
            icon: "🎨".to_owned(),
            desc: "Interfaces".to_owned(),
        }
    );
}
