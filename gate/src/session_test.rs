use super::*;

// =============================================================
// MemorySession
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = MemorySession::new();
    assert!(store.is_empty());
    assert_eq!(store.get("loggedIn").unwrap(), None);
}

#[test]
fn with_seeds_one_entry() {
    let store = MemorySession::with("loggedIn", "true");
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("loggedIn").unwrap().as_deref(), Some("true"));
}

#[test]
fn clear_removes_key() {
    let store = MemorySession::with("loggedIn", "true");
    store.clear("loggedIn").unwrap();
    assert!(!store.contains("loggedIn"));
}

#[test]
fn clear_missing_key_succeeds() {
    let store = MemorySession::new();
    assert!(store.clear("loggedIn").is_ok());
}

#[test]
fn clear_leaves_other_keys() {
    let store = MemorySession::with("loggedIn", "true");
    store.insert("theme", "dark");
    store.clear("loggedIn").unwrap();
    assert!(store.contains("theme"));
}

#[test]
fn unavailable_store_fails_reads_and_clears() {
    let store = MemorySession::unavailable();
    assert!(matches!(store.get("loggedIn"), Err(GateError::Unavailable(_))));
    assert!(store.clear("loggedIn").is_err());
}

// =============================================================
// is_present
// =============================================================

#[test]
fn is_present_for_any_non_empty_value() {
    for value in ["true", "1", "yes", "false"] {
        let store = MemorySession::with("loggedIn", value);
        assert!(is_present(&store, "loggedIn"), "expected present for {value:?}");
    }
}

#[test]
fn is_present_false_for_empty_value() {
    let store = MemorySession::with("loggedIn", "");
    assert!(!is_present(&store, "loggedIn"));
}

#[test]
fn is_present_false_when_missing() {
    let store = MemorySession::with("other", "true");
    assert!(!is_present(&store, "loggedIn"));
}

#[test]
fn is_present_false_when_store_unavailable() {
    let store = MemorySession::unavailable();
    assert!(!is_present(&store, "loggedIn"));
}
