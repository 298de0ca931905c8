use super::*;

#[test]
fn project_endpoints_put_the_identifier_in_the_path() {
    assert_eq!(project_update_endpoint("p1"), "/update/p1");
    assert_eq!(project_delete_endpoint("p1"), "/delete/p1");
}

#[test]
fn hero_update_endpoint_formats_expected_path() {
    assert_eq!(hero_update_endpoint("h9"), "/heroUpdate/h9");
}

#[test]
fn service_endpoints_format_expected_paths() {
    assert_eq!(service_update_endpoint("s1"), "/serviceUpdate/s1");
    assert_eq!(service_delete_endpoint("s1"), "/serviceDelete/s1");
}

#[test]
fn skill_endpoints_format_expected_paths() {
    assert_eq!(skill_update_endpoint("k2"), "/skillUpdate/k2");
    assert_eq!(skill_delete_endpoint("k2"), "/skillDelete/k2");
}

#[test]
fn testimonial_delete_endpoint_formats_expected_path() {
    assert_eq!(testimonial_delete_endpoint("t3"), "/testimonialDelete/t3");
}

#[test]
fn experience_endpoints_format_expected_paths() {
    assert_eq!(experience_update_endpoint("e4"), "/experienceUpdate/e4");
    assert_eq!(experience_delete_endpoint("e4"), "/experienceDelete/e4");
}

#[test]
fn about_endpoints_format_expected_paths() {
    assert_eq!(about_update_endpoint("a5"), "/aboutUpdate/a5");
    assert_eq!(about_delete_endpoint("a5"), "/aboutDelete/a5");
}

#[test]
fn contact_info_endpoints_format_expected_paths() {
    assert_eq!(contact_info_update_endpoint("c6"), "/contactInfoUpdate/c6");
    assert_eq!(contact_info_delete_endpoint("c6"), "/contactInfoDelete/c6");
}

#[test]
fn contact_message_delete_uses_legacy_path() {
    assert_eq!(contact_message_delete_endpoint("m7"), "/deleteContact/m7");
}
