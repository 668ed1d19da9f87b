use super::*;

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());
    assert_eq!(storage.get("token"), None);
}

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set("token", "abc");
    assert_eq!(storage.get("token").as_deref(), Some("abc"));
    storage.set("token", "def");
    assert_eq!(storage.get("token").as_deref(), Some("def"));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_clear_removes_only_that_key() {
    let storage = MemoryStorage::with_entries([("token", "abc"), ("roles", "[]")]);
    storage.clear("token");
    assert_eq!(storage.get("token"), None);
    assert_eq!(storage.get("roles").as_deref(), Some("[]"));
}

#[test]
fn memory_storage_clear_missing_key_is_noop() {
    let storage = MemoryStorage::new();
    storage.clear("missing");
    assert!(storage.is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_inert_without_browser() {
    let storage = LocalStorage;
    storage.set("token", "abc");
    assert_eq!(storage.get("token"), None);
    storage.clear("token");
}
