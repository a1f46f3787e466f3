//! Glob removal with confirmation, dry run and current-context protection

use super::test_utils::write_store;
use ctxconf::context::{ContextCommandService, RemoveOptions};
use ctxconf::error::ApiError;
use ctxconf::store::ConfigStore;
use std::cell::RefCell;
use tempfile::TempDir;

#[test]
fn test_question_mark_pattern() {
    let temp = TempDir::new().unwrap();
    let path = write_store(temp.path(), "config", &["db1", "db2", "db10", "web"], "web");
    let prompt = |_: &str| true;

    let result =
        ContextCommandService::remove_contexts(&path, "db?", RemoveOptions::default(), &prompt)
            .unwrap();

    assert_eq!(result.removed, vec!["db1", "db2"]);
    assert_eq!(
        ConfigStore::load(&path).unwrap().context_names(),
        vec!["db10", "web"]
    );
}

#[test]
fn test_prompt_sees_matches_in_order() {
    let temp = TempDir::new().unwrap();
    let path = write_store(temp.path(), "config", &["c", "a", "b", "keep"], "keep");
    let seen = RefCell::new(Vec::new());
    let prompt = |message: &str| {
        seen.borrow_mut().push(message.to_string());
        true
    };

    ContextCommandService::remove_contexts(&path, "?", RemoveOptions::default(), &prompt)
        .unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            "remove context \"a\"?",
            "remove context \"b\"?",
            "remove context \"c\"?"
        ]
    );
}

#[test]
fn test_exact_current_only_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let path = write_store(temp.path(), "config", &["prod"], "prod");
    let before = std::fs::read(&path).unwrap();
    let prompt = |_: &str| -> bool { panic!("current context must not be offered") };

    let result =
        ContextCommandService::remove_contexts(&path, "prod", RemoveOptions::default(), &prompt)
            .unwrap();

    assert_eq!(result.skipped_current.as_deref(), Some("prod"));
    assert!(result.removed.is_empty());
    assert!(!result.saved);
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn test_zero_matches_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = write_store(temp.path(), "config", &["prod"], "prod");
    let prompt = |_: &str| true;

    let err = ContextCommandService::remove_contexts(&path, "Prod", RemoveOptions::default(), &prompt)
        .unwrap_err();
    assert!(matches!(err, ApiError::NoMatch(ref p) if p == "Prod"));
}

#[test]
fn test_dry_run_with_no_confirm() {
    let temp = TempDir::new().unwrap();
    let path = write_store(temp.path(), "config", &["a-1", "a-2"], "");
    let before = std::fs::read(&path).unwrap();
    let prompt = |_: &str| -> bool { panic!("no prompt expected") };

    let result = ContextCommandService::remove_contexts(
        &path,
        "a-*",
        RemoveOptions {
            no_confirm: true,
            dry_run: true,
        },
        &prompt,
    )
    .unwrap();

    assert!(result.dry_run);
    assert_eq!(result.removed, vec!["a-1", "a-2"]);
    assert_eq!(std::fs::read(&path).unwrap(), before);
}
