use serde::{Deserialize, Serialize};

use mindcare_storage::documents;
use mindcare_storage::error::StorageError;
use mindcare_storage::memory::MemoryStore;
use mindcare_storage::store::DocumentStore;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Note {
    text: String,
}

fn note(text: &str) -> Note {
    Note {
        text: text.to_string(),
    }
}

#[tokio::test]
async fn missing_document_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("nope.json").await.unwrap(), None);
    let loaded: Option<Note> = documents::load(&store, "nope.json").await.unwrap();
    assert!(loaded.is_none());
}

#[tokio::test]
async fn load_required_reports_key() {
    let store = MemoryStore::new();
    let err = documents::load_required::<Note>(&store, "notes/a.json")
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound { key } if key == "notes/a.json"));
}

#[tokio::test]
async fn last_write_wins() {
    let store = MemoryStore::new();
    documents::save(&store, "notes/a.json", &note("first")).await.unwrap();
    documents::save(&store, "notes/a.json", &note("second")).await.unwrap();

    let loaded: Note = documents::load_required(&store, "notes/a.json").await.unwrap();
    assert_eq!(loaded, note("second"));
    assert_eq!(store.list("").await.unwrap(), vec!["notes/a.json"]);
}

#[tokio::test]
async fn list_is_prefix_scoped_and_ordered() {
    let store = MemoryStore::new();
    for key in ["notes/b.json", "notes/a.json", "notesx/c.json", "other/d.json"] {
        store.put(key, b"{}".to_vec()).await.unwrap();
    }

    let keys = store.list("notes/").await.unwrap();
    assert_eq!(keys, vec!["notes/a.json", "notes/b.json"]);
}

#[tokio::test]
async fn load_all_in_key_order() {
    let store = MemoryStore::new();
    documents::save(&store, "notes/002.json", &note("two")).await.unwrap();
    documents::save(&store, "notes/001.json", &note("one")).await.unwrap();

    let all: Vec<Note> = documents::load_all(&store, "notes/").await.unwrap();
    assert_eq!(all, vec![note("one"), note("two")]);
}

#[tokio::test]
async fn corrupt_document_is_a_serialization_error() {
    let store = MemoryStore::new();
    store.put("notes/bad.json", b"not json".to_vec()).await.unwrap();
    let err = documents::load::<Note>(&store, "notes/bad.json")
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}

#[tokio::test]
async fn delete_prefix_removes_only_matching() {
    let store = MemoryStore::new();
    for key in ["notes/a.json", "notes/b.json", "keep/c.json"] {
        store.put(key, b"{}".to_vec()).await.unwrap();
    }

    assert_eq!(documents::delete_prefix(&store, "notes/").await.unwrap(), 2);
    assert_eq!(store.list("").await.unwrap(), vec!["keep/c.json"]);

    // Deleting a missing key is fine.
    store.delete("notes/a.json").await.unwrap();
}
