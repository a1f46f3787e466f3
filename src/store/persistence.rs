//! Persistence layer for the context store
//!
//! TOML on disk. Saves go through a temporary sibling file and a rename so a
//! failed write leaves the previous file intact.

use crate::error::StorageError;
use crate::store::ConfigStore;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

impl ConfigStore {
    /// Load a store file. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        let content = fs::read(path).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        decode(&content, path)
    }

    /// Load a store file, treating a missing file as an empty store.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if !path.exists() {
            debug!(path = %path.display(), "Store file not found, starting empty");
            return Ok(Self::new());
        }
        Self::load(path)
    }

    /// Decode a store from raw bytes (e.g. an issuance payload).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StorageError> {
        decode(bytes, Path::new("<payload>"))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, StorageError> {
        toml::to_string_pretty(self)
            .map(String::into_bytes)
            .map_err(|e| StorageError::Serialize(e.to_string()))
    }

    /// Write the store to `path`, replacing the previous file atomically.
    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        let bytes = self.to_bytes()?;
        let write_err = |source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let tmp_path = temp_path_for(path);
        let result = write_private(&tmp_path, &bytes).and_then(|_| fs::rename(&tmp_path, path));
        if let Err(source) = result {
            let _ = fs::remove_file(&tmp_path);
            return Err(write_err(source));
        }

        debug!(path = %path.display(), contexts = self.len(), "Store saved");
        Ok(())
    }
}

fn decode(bytes: &[u8], path: &Path) -> Result<ConfigStore, StorageError> {
    let parse_err = |message: String| StorageError::Parse {
        path: path.to_path_buf(),
        message,
    };
    let text = std::str::from_utf8(bytes).map_err(|e| parse_err(e.to_string()))?;
    toml::from_str(text).map_err(|e| parse_err(e.to_string()))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

/// Write with owner-only permissions; the file holds private keys.
fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
