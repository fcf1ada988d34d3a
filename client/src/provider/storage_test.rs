use super::*;

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::default();
    assert_eq!(store.get("k"), None);
    store.set("k", "v1");
    assert_eq!(store.get("k").as_deref(), Some("v1"));
    store.set("k", "v2");
    assert_eq!(store.get("k").as_deref(), Some("v2"));
}

#[test]
fn browser_store_is_inert_outside_browser() {
    let store = BrowserStore;
    store.set("admin-rtl", "true");
    assert_eq!(store.get("admin-rtl"), None);
}

#[test]
fn default_store_is_usable_behind_arc() {
    let store = default_store();
    store.set("admin-rtl", "true");
    assert_eq!(store.get("admin-rtl").as_deref(), Some("true"));
}
