use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_has_no_filter_or_dialogs() {
    let state = UiState::default();
    assert!(state.filter.is_empty());
    assert!(state.profile_vendor.is_none());
    assert!(state.chat_vendor.is_none());
}

// =============================================================
// Search
// =============================================================

#[test]
fn draft_filter_applies_only_on_search() {
    let mut state = UiState::default();
    state.draft_filter.cuisine = "thai".to_owned();
    assert!(state.filter.is_empty());
    state.run_search();
    assert_eq!(state.filter.cuisine, "thai");
}

#[test]
fn clear_search_resets_both_filters() {
    let mut state = UiState::default();
    state.draft_filter.location = "leeds".to_owned();
    state.run_search();
    state.clear_search();
    assert!(state.filter.is_empty());
    assert!(state.draft_filter.is_empty());
}

// =============================================================
// Dialogs
// =============================================================

#[test]
fn open_chat_from_profile_closes_profile() {
    let mut state = UiState::default();
    state.open_profile(3);
    state.open_chat(3);
    assert_eq!(state.profile_vendor, None);
    assert_eq!(state.chat_vendor, Some(3));
}

#[test]
fn close_dialogs_clears_everything() {
    let mut state = UiState::default();
    state.open_profile(1);
    state.chat_vendor = Some(2);
    state.close_dialogs();
    assert_eq!(state, UiState::default());
}
