use super::*;
use crate::provider::storage::MemoryStore;

#[test]
fn rtl_languages_are_detected_by_primary_subtag() {
    assert!(is_rtl_language("ar"));
    assert!(is_rtl_language("ar-SA"));
    assert!(is_rtl_language("he-IL"));
    assert!(is_rtl_language("FA"));
    assert!(is_rtl_language("ur_PK"));
    assert!(!is_rtl_language("en-US"));
    assert!(!is_rtl_language(""));
}

#[test]
fn stored_preference_wins_over_language() {
    let store = MemoryStore::default();
    store.set(RTL_STORAGE_KEY, "false");
    assert!(!resolve_preference(&store, Some("ar-AE")));
    store.set(RTL_STORAGE_KEY, "true");
    assert!(resolve_preference(&store, Some("en-US")));
}

#[test]
fn missing_preference_falls_back_to_language() {
    let store = MemoryStore::default();
    assert!(resolve_preference(&store, Some("ar-AE")));
    assert!(!resolve_preference(&store, Some("en-GB")));
    assert!(!resolve_preference(&store, None));
}

#[test]
fn toggle_persists_new_value() {
    let store = MemoryStore::default();
    assert!(toggle(&store, false));
    assert_eq!(store.get(RTL_STORAGE_KEY).as_deref(), Some("true"));
    assert!(!toggle(&store, true));
    assert_eq!(store.get(RTL_STORAGE_KEY).as_deref(), Some("false"));
}

#[test]
fn read_preference_without_browser_uses_store_only() {
    let store = MemoryStore::default();
    assert!(!read_preference(&store));
}

#[test]
fn arabic_digits_replace_ascii_only() {
    assert_eq!(to_arabic_digits("12:05"), "١٢:٠٥");
    assert_eq!(to_arabic_digits("abc"), "abc");
}
