//! Store file round trips and on-disk format

use super::test_utils::{record, write_store};
use ctxconf::error::{ApiError, StorageError};
use ctxconf::store::{ConfigStore, ContextRecord};
use tempfile::TempDir;

#[test]
fn test_round_trip_preserves_everything() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config");

    let mut store = ConfigStore::with_context("prod", record("prod"));
    let mut lab = ContextRecord::from_parts(
        vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()],
        vec!["n1".to_string()],
        "Y2E=".to_string(),
        "Y2VydA==".to_string(),
        "a2V5".to_string(),
    )
    .unwrap();
    lab.metadata.insert("owner".to_string(), "ops".to_string());
    store.add_context("lab", lab);
    store.save(&path).unwrap();

    let loaded = ConfigStore::load(&path).unwrap();
    assert_eq!(loaded, store);
    assert_eq!(loaded.current, "prod");
}

#[test]
fn test_on_disk_layout() {
    let temp = TempDir::new().unwrap();
    let path = write_store(temp.path(), "config", &["b", "a"], "a");

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("context = \"a\""));
    let a = text.find("[contexts.a]").unwrap();
    let b = text.find("[contexts.b]").unwrap();
    assert!(a < b, "contexts must be written in ascending order");
}

#[test]
fn test_hand_written_file_loads() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config");
    std::fs::write(
        &path,
        r#"
context = "edge"

[contexts.edge]
endpoints = ["192.168.1.10"]
nodes = ["192.168.1.11", "192.168.1.12"]
crt = "Y2VydA=="
key = "a2V5"
"#,
    )
    .unwrap();

    let store = ConfigStore::load(&path).unwrap();
    let edge = store.resolve_context(None).unwrap();
    assert_eq!(edge.nodes.len(), 2);
    assert!(edge.has_credentials());
    assert!(edge.ca.is_empty());
}

#[test]
fn test_open_missing_is_empty_but_load_is_strict() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent");

    let store = ConfigStore::open(&path).unwrap();
    assert!(store.is_empty());
    assert!(matches!(
        ConfigStore::load(&path),
        Err(StorageError::Io { .. })
    ));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config");
    std::fs::write(&path, "context = [not toml").unwrap();

    let err = ConfigStore::open(&path).unwrap_err();
    assert!(matches!(err, StorageError::Parse { .. }));
    let api: ApiError = err.into();
    assert!(api.to_string().contains("error parsing config"));
}

#[test]
fn test_resolution_errors() {
    let mut store = ConfigStore::new();
    assert!(matches!(
        store.resolve_context(None),
        Err(ApiError::NoContextSet)
    ));

    store.add_context("prod", record("prod"));
    store.current = "gone".to_string();
    assert!(matches!(
        store.resolve_context(None),
        Err(ApiError::ContextNotFound(name)) if name == "gone"
    ));
    assert!(store.resolve_context(Some("prod")).is_ok());
}
