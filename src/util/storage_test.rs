use super::*;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Sample {
    name: String,
}

#[test]
fn memory_storage_write_read_remove() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.read("k"), Ok(None));
    storage.write("k", "v").unwrap();
    assert_eq!(storage.read("k"), Ok(Some("v".to_owned())));
    storage.remove("k").unwrap();
    assert_eq!(storage.read("k"), Ok(None));
}

#[test]
fn save_record_wraps_state_with_version() {
    let storage = MemoryStorage::new();
    save_record(&storage, "k", &Sample { name: "a".to_owned() });
    let raw = storage.read("k").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value, serde_json::json!({ "state": { "name": "a" }, "version": RECORD_VERSION }));
}

#[test]
fn load_record_reads_saved_state() {
    let storage = MemoryStorage::new();
    save_record(&storage, "k", &Sample { name: "a".to_owned() });
    assert_eq!(load_record::<Sample>(&storage, "k"), Some(Sample { name: "a".to_owned() }));
}

#[test]
fn load_record_missing_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(load_record::<Sample>(&storage, "k"), None);
}

#[test]
fn load_record_discards_corrupt_json() {
    let storage = MemoryStorage::new();
    storage.write("k", "{not json").unwrap();
    assert_eq!(load_record::<Sample>(&storage, "k"), None);
}

#[test]
fn load_record_discards_other_versions() {
    let storage = MemoryStorage::new();
    storage
        .write("k", r#"{"state":{"name":"old"},"version":0}"#)
        .unwrap();
    assert_eq!(load_record::<Sample>(&storage, "k"), None);
}

#[test]
fn remove_record_clears_key() {
    let storage = MemoryStorage::new();
    save_record(&storage, "k", &Sample { name: "a".to_owned() });
    remove_record(&storage, "k");
    assert_eq!(storage.read("k"), Ok(None));
}
