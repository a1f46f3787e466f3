//! Store merging with collision-safe renaming.

use crate::store::ConfigStore;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A source context that landed under a different name in the destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeRename {
    pub from: String,
    pub to: String,
}

impl fmt::Display for MergeRename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.from, self.to)
    }
}

/// Import every context of `source` into `destination`.
///
/// Source contexts are processed in ascending name order. A name already taken
/// in the destination (including by a context imported earlier in this merge)
/// gets the lowest free `-N` suffix, N >= 1. Existing destination entries are
/// never touched and the destination's current context is kept; the source's
/// current context is ignored.
pub fn merge(destination: &mut ConfigStore, source: &ConfigStore) -> Vec<MergeRename> {
    let mut renames = Vec::new();

    for (name, record) in &source.contexts {
        let target = free_name(destination, name);
        if target != *name {
            debug!(from = %name, to = %target, "Renaming context on merge");
            renames.push(MergeRename {
                from: name.clone(),
                to: target.clone(),
            });
        }
        destination.contexts.insert(target, record.clone());
    }

    renames
}

fn free_name(store: &ConfigStore, name: &str) -> String {
    if !store.contains(name) {
        return name.to_string();
    }
    (1u64..)
        .map(|i| format!("{}-{}", name, i))
        .find(|candidate| !store.contains(candidate))
        .unwrap_or_else(|| name.to_string())
}
