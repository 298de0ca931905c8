use super::*;

#[test]
fn ui_state_defaults() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(state.sidebar_open);
    assert!(state.notice.is_none());
}

#[test]
fn notify_error_sets_kind_and_text() {
    let mut state = UiState::default();
    state.notify_error("Failed to fetch projects");
    let notice = state.notice.expect("notice set");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, "Failed to fetch projects");
}

#[test]
fn notices_get_increasing_sequence_numbers() {
    let mut state = UiState::default();
    state.notify_success("Saved");
    let first = state.notice.clone().expect("first notice").seq;
    state.notify_success("Saved");
    let second = state.notice.clone().expect("second notice").seq;
    assert!(second > first);
}

#[test]
fn dismiss_clears_matching_notice() {
    let mut state = UiState::default();
    state.notify_success("Saved");
    let seq = state.notice.clone().expect("notice").seq;
    state.dismiss_notice(seq);
    assert!(state.notice.is_none());
}

#[test]
fn stale_dismiss_keeps_newer_notice() {
    let mut state = UiState::default();
    state.notify_success("Saved");
    let stale = state.notice.clone().expect("notice").seq;
    state.notify_error("Delete failed");
    state.dismiss_notice(stale);
    let notice = state.notice.expect("newer notice survives");
    assert_eq!(notice.text, "Delete failed");
}
