use super::*;

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("user_detail"), Ok(None));
}

#[test]
fn memory_storage_overwrites_existing_value() {
    let storage = MemoryStorage::new().with_entry("k", "old");
    storage.set("k", "new").unwrap();
    assert_eq!(storage.get("k"), Ok(Some("new".to_owned())));
}

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::new();
    let other = storage.clone();
    storage.set("k", "v").unwrap();
    assert_eq!(other.get("k"), Ok(Some("v".to_owned())));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_unavailable_outside_the_browser() {
    assert_eq!(BrowserStorage.get("k"), Err(StorageError::Unavailable));
    assert_eq!(BrowserStorage.set("k", "v"), Err(StorageError::Unavailable));
}
