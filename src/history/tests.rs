use super::*;
use tempfile::TempDir;

fn store() -> HistoryStore {
    HistoryStore::open_in_memory().unwrap()
}

#[test]
fn test_record_and_get() {
    let store = store();
    let id = store.record("demo", "src/\n  main.rs", "alice").unwrap();

    let record = store.get(id, "alice").unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.structure_name, "demo");
    assert_eq!(record.structure_content, "src/\n  main.rs");
    assert_eq!(record.owner, "alice");
}

#[test]
fn test_list_is_newest_first_and_per_owner() {
    let store = store();
    let first = store.record("one", "a.txt", "alice").unwrap();
    let second = store.record("two", "b.txt", "alice").unwrap();
    store.record("other", "c.txt", "bob").unwrap();

    let ids: Vec<i64> = store
        .list_for_owner("alice")
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![second, first]);

    assert_eq!(store.list_for_owner("bob").unwrap().len(), 1);
    assert!(store.list_for_owner("carol").unwrap().is_empty());
}

#[test]
fn test_get_missing_is_not_found() {
    let store = store();
    assert!(matches!(store.get(42, "alice"), Err(HistoryError::NotFound(42))));
}

#[test]
fn test_foreign_record_is_unauthorized() {
    let store = store();
    let id = store.record("demo", "a.txt", "alice").unwrap();

    assert!(matches!(
        store.get(id, "bob"),
        Err(HistoryError::Unauthorized { owner, .. }) if owner == "bob"
    ));
    assert!(matches!(
        store.delete(id, "bob"),
        Err(HistoryError::Unauthorized { .. })
    ));

    // Still there for its owner
    assert!(store.get(id, "alice").is_ok());
}

#[test]
fn test_delete() {
    let store = store();
    let id = store.record("demo", "a.txt", "alice").unwrap();

    store.delete(id, "alice").unwrap();
    assert!(matches!(store.get(id, "alice"), Err(HistoryError::NotFound(_))));
    assert!(matches!(
        store.delete(id, "alice"),
        Err(HistoryError::NotFound(_))
    ));
}

#[test]
fn test_file_store_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.db");

    let id = {
        let store = HistoryStore::open(&path).unwrap();
        store.record("demo", "{\"a\": null}", "alice").unwrap()
    };

    let store = HistoryStore::open(&path).unwrap();
    let record = store.get(id, "alice").unwrap();
    assert_eq!(record.structure_content, "{\"a\": null}");
}
