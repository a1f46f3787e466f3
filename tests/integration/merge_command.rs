//! Merge through the command service, file to file

use super::test_utils::write_store;
use ctxconf::context::ContextCommandService;
use ctxconf::merge::MergeRename;
use ctxconf::store::ConfigStore;
use tempfile::TempDir;

#[test]
fn test_merge_collisions_get_numbered_suffixes() {
    let temp = TempDir::new().unwrap();
    let dest = write_store(temp.path(), "config", &["prod", "prod-1"], "prod");
    let source = write_store(temp.path(), "incoming", &["prod", "staging"], "staging");

    let result = ContextCommandService::merge_from(&dest, &source).unwrap();

    assert_eq!(result.imported, 2);
    assert_eq!(
        result.renames,
        vec![MergeRename {
            from: "prod".to_string(),
            to: "prod-2".to_string(),
        }]
    );

    let store = ConfigStore::load(&dest).unwrap();
    assert_eq!(
        store.context_names(),
        vec!["prod", "prod-1", "prod-2", "staging"]
    );
    assert_eq!(store.current, "prod");
}

#[test]
fn test_merge_same_file_twice_duplicates() {
    let temp = TempDir::new().unwrap();
    let dest = write_store(temp.path(), "config", &[], "");
    let source = write_store(temp.path(), "incoming", &["x"], "x");

    let first = ContextCommandService::merge_from(&dest, &source).unwrap();
    assert!(first.renames.is_empty());
    let second = ContextCommandService::merge_from(&dest, &source).unwrap();
    assert_eq!(second.renames[0].to, "x-1");

    let store = ConfigStore::load(&dest).unwrap();
    assert_eq!(store.context_names(), vec!["x", "x-1"]);
    assert_eq!(store.contexts["x"], store.contexts["x-1"]);
    assert!(store.current.is_empty());
}

#[test]
fn test_merge_into_missing_destination_creates_it() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("fresh").join("config");
    let source = write_store(temp.path(), "incoming", &["a", "b"], "a");

    ContextCommandService::merge_from(&dest, &source).unwrap();

    let store = ConfigStore::load(&dest).unwrap();
    assert_eq!(store.context_names(), vec!["a", "b"]);
}

#[test]
fn test_merge_bad_source_leaves_destination_untouched() {
    let temp = TempDir::new().unwrap();
    let dest = write_store(temp.path(), "config", &["prod"], "prod");
    let before = std::fs::read(&dest).unwrap();
    let source = temp.path().join("broken");
    std::fs::write(&source, "contexts = 5").unwrap();

    assert!(ContextCommandService::merge_from(&dest, &source).is_err());
    assert_eq!(std::fs::read(&dest).unwrap(), before);
}
