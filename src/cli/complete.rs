//! Shell completion candidates for context names.
//!
//! Completion runs before any flags are parsed, so the store is located from
//! `CTXCONF_STORE`, the tool config and the default path only.

use crate::config::{resolve_store_path, ConfigLoader};
use crate::store::ConfigStore;
use clap_complete::engine::CompletionCandidate;
use std::path::Path;
use tracing::debug;

/// Context names from the store the CLI would use, ascending.
pub fn context_name_candidates() -> Vec<CompletionCandidate> {
    let store_path = ConfigLoader::load().and_then(|config| resolve_store_path(None, &config));
    match store_path {
        Ok(path) => candidates_for_store(&path),
        Err(e) => {
            debug!(error = %e, "No store for completion");
            Vec::new()
        }
    }
}

/// Context names defined in the store at `path`, ascending.
pub fn candidates_for_store(path: &Path) -> Vec<CompletionCandidate> {
    match ConfigStore::open(path) {
        Ok(store) => store
            .context_names()
            .into_iter()
            .map(CompletionCandidate::new)
            .collect(),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Store unreadable for completion");
            Vec::new()
        }
    }
}
