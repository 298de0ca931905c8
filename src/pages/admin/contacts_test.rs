use super::*;

#[test]
fn rating_label_formats_present_ratings() {
    assert_eq!(rating_label(Some("5")), "5/5");
    assert_eq!(rating_label(Some(" 3 ")), "3/5");
}

#[test]
fn rating_label_shows_dash_when_absent() {
    assert_eq!(rating_label(None), "—");
    assert_eq!(rating_label(Some("")), "—");
    assert_eq!(rating_label(Some("   ")), "—");
}
