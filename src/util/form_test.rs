use super::*;

#[test]
fn require_all_accepts_non_blank_values() {
    assert_eq!(require_all(&[("Title", "Site"), ("Tagline", "Fast")]), Ok(()));
}

#[test]
fn require_all_names_the_first_missing_field() {
    assert_eq!(
        require_all(&[("Title", "Site"), ("Tagline", "  "), ("Link", "")]),
        Err("Tagline is required".to_owned())
    );
}

#[test]
fn require_all_treats_whitespace_as_missing() {
    assert_eq!(require_all(&[("Name", "\t ")]), Err("Name is required".to_owned()));
}

#[test]
fn split_list_trims_and_drops_empty_entries() {
    assert_eq!(split_list("rust, wasm,, leptos ,"), vec!["rust", "wasm", "leptos"]);
    assert!(split_list("  ").is_empty());
}

#[test]
fn join_list_round_trips_for_editing() {
    let items = vec!["rust".to_owned(), "wasm".to_owned()];
    assert_eq!(join_list(&items), "rust, wasm");
    assert_eq!(split_list(&join_list(&items)), items);
}
