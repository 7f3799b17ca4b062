use folio_model::{FieldQuery, GatewayError, PersistenceGateway};
use folio_storage::MemoryStore;
use folio_types::EntityId;
use pretty_assertions::assert_eq;
use serde_json::json;

// ── Documents ────────────────────────────────────────────────────

#[test]
fn put_then_get() {
    let store = MemoryStore::new();
    let id = EntityId::new();
    store.put("block", id, json!({"slug": "intro"})).unwrap();

    assert_eq!(store.get("block", id).unwrap(), Some(json!({"slug": "intro"})));
    assert!(store.contains("block", id));
    assert_eq!(store.count("block"), 1);
    assert_eq!(store.count("page"), 0);
}

#[test]
fn put_replaces_existing_document() {
    let store = MemoryStore::new();
    let id = EntityId::new();
    store.put("block", id, json!({"v": 1})).unwrap();
    store.put("block", id, json!({"v": 2})).unwrap();
    assert_eq!(store.get("block", id).unwrap(), Some(json!({"v": 2})));
    assert_eq!(store.count("block"), 1);
}

#[test]
fn remove_reports_presence() {
    let store = MemoryStore::new();
    let id = EntityId::new();
    store.put("block", id, json!({})).unwrap();
    assert!(store.remove("block", id).unwrap());
    assert!(!store.remove("block", id).unwrap());
    assert_eq!(store.get("block", id).unwrap(), None);
}

// ── Field queries ────────────────────────────────────────────────

#[test]
fn find_one_matches_case_insensitive_member_name() {
    let store = MemoryStore::new();
    let id = EntityId::new();
    store.put("block", id, json!({"slug": "intro"})).unwrap();

    let found = store
        .find_one("block", &FieldQuery::new("Slug", "intro"))
        .unwrap();
    assert_eq!(found, Some(id));
}

#[test]
fn find_one_compares_values_exactly() {
    let store = MemoryStore::new();
    store.put("block", EntityId::new(), json!({"slug": "intro"})).unwrap();
    assert_eq!(
        store.find_one("block", &FieldQuery::new("slug", "Intro")).unwrap(),
        None
    );
}

#[test]
fn find_one_is_scoped_to_entity_type() {
    let store = MemoryStore::new();
    store.put("page", EntityId::new(), json!({"slug": "intro"})).unwrap();
    assert_eq!(
        store.find_one("block", &FieldQuery::new("slug", "intro")).unwrap(),
        None
    );
}

#[test]
fn find_one_honours_exclusion() {
    let store = MemoryStore::new();
    let id = EntityId::new();
    store.put("block", id, json!({"slug": "intro"})).unwrap();
    let query = FieldQuery::new("slug", "intro").excluding(id);
    assert_eq!(store.find_one("block", &query).unwrap(), None);
}

#[test]
fn non_string_members_never_match() {
    let store = MemoryStore::new();
    store.put("block", EntityId::new(), json!({"slug": 7})).unwrap();
    assert_eq!(
        store.find_one("block", &FieldQuery::new("slug", "7")).unwrap(),
        None
    );
}

// ── Availability ─────────────────────────────────────────────────

#[test]
fn offline_store_reports_unavailable() {
    let store = MemoryStore::new();
    store.set_available(false);
    let err = store
        .find_one("block", &FieldQuery::new("slug", "intro"))
        .unwrap_err();
    assert!(matches!(err, GatewayError::Unavailable(_)));
    assert!(store.put("block", EntityId::new(), json!({})).is_err());

    store.set_available(true);
    assert!(store.put("block", EntityId::new(), json!({})).is_ok());
}
