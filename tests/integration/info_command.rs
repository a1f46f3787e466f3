//! Info report against fixture certificates

use super::test_utils::record_with_fixture_cert;
use chrono::{DateTime, TimeZone, Utc};
use ctxconf::cert::Tense;
use ctxconf::context::ContextCommandService;
use ctxconf::error::ApiError;
use ctxconf::store::{ConfigStore, ContextRecord};
use tempfile::TempDir;

const ADMIN_CRT: &str = include_str!("../fixtures/admin.crt");
const NOROLE_CRT: &str = include_str!("../fixtures/norole.crt");

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 19, 1, 33).unwrap()
}

#[test]
fn test_info_for_current_context() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config");
    ConfigStore::with_context("admin", record_with_fixture_cert(ADMIN_CRT))
        .save(&path)
        .unwrap();

    let info = ContextCommandService::info(&path, None, now()).unwrap();

    assert_eq!(info.context, "admin");
    assert_eq!(info.nodes, vec!["10.5.0.3"]);
    assert_eq!(info.endpoints, vec!["10.5.0.2"]);
    assert_eq!(info.roles, vec!["os:admin", "os:reader"]);
    assert_eq!(info.not_after.format("%Y-%m-%d").to_string(), "2036-10-16");
    assert_eq!(info.lifetime.to_string(), "10 years from now");
}

#[test]
fn test_info_with_override_and_expired_cert() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config");
    let mut store = ConfigStore::with_context("admin", record_with_fixture_cert(ADMIN_CRT));
    store.add_context("plain", record_with_fixture_cert(NOROLE_CRT));
    store.save(&path).unwrap();

    let later = Utc.with_ymd_and_hms(2028, 1, 1, 0, 0, 0).unwrap();
    let info = ContextCommandService::info(&path, Some("plain"), later).unwrap();

    assert_eq!(info.context, "plain");
    assert!(info.roles.is_empty());
    assert_eq!(info.lifetime.tense, Tense::Past);
    assert!(info.lifetime.to_string().ends_with(" ago"));
}

#[test]
fn test_info_without_certificate() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config");
    ConfigStore::with_context("bare", ContextRecord::default())
        .save(&path)
        .unwrap();

    match ContextCommandService::info(&path, None, now()) {
        Err(ApiError::CertDecode(message)) => {
            assert_eq!(message, "context \"bare\" has no client certificate")
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_info_without_current_context() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config");
    assert!(matches!(
        ContextCommandService::info(&path, None, now()),
        Err(ApiError::NoContextSet)
    ));
}
