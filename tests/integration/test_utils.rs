//! Shared test utilities for integration tests
//!
//! Store fixtures plus serialized access to process environment variables,
//! which the config loader and store path resolution read.

use ctxconf::store::{ConfigStore, ContextRecord};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ENV_KEYS: &[&str] = &["HOME", "XDG_CONFIG_HOME", "CTXCONF_STORE"];

/// Environment variable state to restore after test
struct EnvState {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            saved: ENV_KEYS
                .iter()
                .map(|key| (*key, std::env::var(key).ok()))
                .collect(),
        }
    }

    fn restore(self) {
        for (key, value) in self.saved {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME pointing into `test_dir` and
/// CTXCONF_STORE unset. The original environment is restored afterwards.
pub fn with_isolated_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let home = test_dir.path().join("home");
    let config_home = test_dir.path().join("xdg");
    std::fs::create_dir_all(&home).unwrap();
    std::fs::create_dir_all(&config_home).unwrap();

    std::env::set_var("HOME", &home);
    std::env::set_var("XDG_CONFIG_HOME", &config_home);
    std::env::remove_var("CTXCONF_STORE");

    let result = f();

    env_state.restore();

    result
}

/// Record with one endpoint derived from the name.
pub fn record(name: &str) -> ContextRecord {
    ContextRecord {
        endpoints: vec![format!("{}.example", name)],
        ..Default::default()
    }
}

/// Write a store with the given contexts and current pointer to `dir/file`.
pub fn write_store(dir: &Path, file: &str, names: &[&str], current: &str) -> PathBuf {
    let path = dir.join(file);
    let mut store = ConfigStore::new();
    for name in names {
        store.add_context(*name, record(name));
    }
    store.current = current.to_string();
    store.save(&path).unwrap();
    path
}

/// Record carrying the fixture client certificate and key.
pub fn record_with_fixture_cert(cert_pem: &str) -> ContextRecord {
    use base64::Engine as _;
    let engine = base64::engine::general_purpose::STANDARD;
    ContextRecord::from_parts(
        vec!["10.5.0.2".to_string()],
        vec!["10.5.0.3".to_string()],
        String::new(),
        engine.encode(cert_pem),
        engine.encode(include_str!("../fixtures/client.key")),
    )
    .unwrap()
}
