use super::*;

// =============================================================
// send_allowed
// =============================================================

#[test]
fn send_waits_for_open_session() {
    assert!(!send_allowed(false, "hello"));
}

#[test]
fn send_ignores_blank_text() {
    assert!(!send_allowed(true, ""));
    assert!(!send_allowed(true, "   \n"));
}

#[test]
fn send_allowed_once_session_is_open() {
    assert!(send_allowed(true, "hello"));
}

// =============================================================
// status_label
// =============================================================

#[test]
fn status_labels_cover_every_state() {
    assert_eq!(status_label(ConnectionStatus::Connecting), "Connecting...");
    assert_eq!(status_label(ConnectionStatus::Connected), "Online");
    assert_eq!(status_label(ConnectionStatus::Error), "Connection error");
    assert_eq!(status_label(ConnectionStatus::Disconnected), "Offline");
}
