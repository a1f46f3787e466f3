//! Context Store
//!
//! Holds the named contexts and the current-context pointer. Persistence is a
//! load/save pair in [`persistence`]; everything here is in-memory.

pub mod persistence;
pub mod record;

pub use record::ContextRecord;

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All contexts of one store file plus the selected one.
///
/// Contexts are kept in a `BTreeMap` so every observable iteration (listing,
/// completion, merge order) is ascending by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigStore {
    /// Name of the current context, empty when none is selected
    #[serde(default, rename = "context")]
    pub current: String,

    #[serde(default)]
    pub contexts: BTreeMap<String, ContextRecord>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with a single context that is also current.
    pub fn with_context(name: impl Into<String>, record: ContextRecord) -> Self {
        let name = name.into();
        let mut store = Self::new();
        store.contexts.insert(name.clone(), record);
        store.current = name;
        store
    }

    /// Name of the context an operation applies to.
    ///
    /// An explicit name wins over the current pointer; neither being set is
    /// `NoContextSet`, and a name without a definition is `ContextNotFound`.
    pub fn resolve_context_name<'a>(
        &'a self,
        explicit: Option<&'a str>,
    ) -> Result<&'a str, ApiError> {
        let name = match explicit {
            Some(name) if !name.is_empty() => name,
            _ => self.current.as_str(),
        };
        if name.is_empty() {
            return Err(ApiError::NoContextSet);
        }
        if !self.contexts.contains_key(name) {
            return Err(ApiError::ContextNotFound(name.to_string()));
        }
        Ok(name)
    }

    pub fn resolve_context(&self, explicit: Option<&str>) -> Result<&ContextRecord, ApiError> {
        let name = self.resolve_context_name(explicit)?;
        self.contexts
            .get(name)
            .ok_or_else(|| ApiError::ContextNotFound(name.to_string()))
    }

    pub fn resolve_context_mut(
        &mut self,
        explicit: Option<&str>,
    ) -> Result<&mut ContextRecord, ApiError> {
        let name = self.resolve_context_name(explicit)?.to_string();
        self.contexts
            .get_mut(&name)
            .ok_or(ApiError::ContextNotFound(name))
    }

    pub fn set_current(&mut self, name: &str) -> Result<(), ApiError> {
        if !self.contexts.contains_key(name) {
            return Err(ApiError::ContextNotFound(name.to_string()));
        }
        self.current = name.to_string();
        Ok(())
    }

    /// Insert a context, replacing any existing definition of the same name.
    ///
    /// Returns the replaced record, if any.
    pub fn add_context(
        &mut self,
        name: impl Into<String>,
        record: ContextRecord,
    ) -> Option<ContextRecord> {
        self.contexts.insert(name.into(), record)
    }

    pub fn remove_context(&mut self, name: &str) -> bool {
        self.contexts.remove(name).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.contexts.contains_key(name)
    }

    /// Context names in ascending order.
    pub fn context_names(&self) -> Vec<String> {
        self.contexts.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}
