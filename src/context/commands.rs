//! Context command service: single entry point per CLI command variant.
//!
//! Each command loads the store, performs one logical operation and saves at
//! most once. Options arrive as plain values built by the caller.

use crate::cert::{self, RelativeTime};
use crate::context::issuer::{ClientConfigRequest, CredentialIssuer};
use crate::context::prompt::ConfirmPrompt;
use crate::error::ApiError;
use crate::matcher;
use crate::merge::{self, MergeRename};
use crate::role;
use crate::store::{ConfigStore, ContextRecord};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct ContextCommandService;

/// What `add` does when the name is already taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AddPolicy {
    /// Replace the existing definition
    #[default]
    Overwrite,
    /// Fail with `ContextExists`
    Reject,
}

#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    pub ca: Option<PathBuf>,
    pub crt: Option<PathBuf>,
    pub key: Option<PathBuf>,
    pub policy: AddPolicy,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveOptions {
    /// Remove every match without asking
    pub no_confirm: bool,
    /// Ask and report, but never write
    pub dry_run: bool,
}

pub const DEFAULT_CRT_TTL: Duration = Duration::from_secs(87_600 * 3600);

#[derive(Debug, Clone)]
pub struct NewConfigOptions {
    pub roles: Vec<String>,
    pub crt_ttl: Duration,
}

impl Default for NewConfigOptions {
    fn default() -> Self {
        Self {
            roles: vec![role::Role::Admin.as_str().to_string()],
            crt_ttl: DEFAULT_CRT_TTL,
        }
    }
}

/// Result of add command.
#[derive(Debug, Clone)]
pub struct AddResult {
    pub name: String,
    pub replaced: bool,
}

/// Result of remove command.
#[derive(Debug, Clone, Default)]
pub struct RemoveResult {
    pub matched: Vec<String>,
    pub removed: Vec<String>,
    pub declined: Vec<String>,
    /// Set when the current context matched and was left alone
    pub skipped_current: Option<String>,
    pub dry_run: bool,
    pub saved: bool,
}

/// One row of the contexts listing.
#[derive(Debug, Clone, Serialize)]
pub struct ContextListItem {
    pub name: String,
    pub current: bool,
    pub endpoints: Vec<String>,
    pub nodes: Vec<String>,
}

/// Result of contexts command.
#[derive(Debug, Clone, Serialize)]
pub struct ContextListResult {
    pub current: String,
    pub contexts: Vec<ContextListItem>,
}

/// Result of merge command.
#[derive(Debug, Clone)]
pub struct MergeResult {
    pub imported: usize,
    pub renames: Vec<MergeRename>,
}

/// Result of new command.
#[derive(Debug, Clone)]
pub struct NewConfigResult {
    pub path: PathBuf,
    pub context: String,
    pub endpoints: Vec<String>,
}

/// Result of info command.
#[derive(Debug, Clone)]
pub struct InfoResult {
    pub context: String,
    pub nodes: Vec<String>,
    pub endpoints: Vec<String>,
    pub roles: Vec<String>,
    pub not_after: DateTime<Utc>,
    pub lifetime: RelativeTime,
}

impl ContextCommandService {
    /// Replace the endpoints of the selected context.
    pub fn set_endpoints(
        store_path: &Path,
        context: Option<&str>,
        endpoints: &[String],
    ) -> Result<(), ApiError> {
        if endpoints.is_empty() {
            return Err(ApiError::InvalidArgument(
                "at least one endpoint is required".to_string(),
            ));
        }
        let mut store = ConfigStore::open(store_path)?;
        store.resolve_context_mut(context)?.endpoints = trim_all(endpoints);
        store.save(store_path)?;
        Ok(())
    }

    /// Replace the nodes of the selected context. An empty list clears them.
    pub fn set_nodes(
        store_path: &Path,
        context: Option<&str>,
        nodes: &[String],
    ) -> Result<(), ApiError> {
        let mut store = ConfigStore::open(store_path)?;
        store.resolve_context_mut(context)?.nodes = trim_all(nodes);
        store.save(store_path)?;
        Ok(())
    }

    pub fn use_context(store_path: &Path, name: &str) -> Result<(), ApiError> {
        let mut store = ConfigStore::open(store_path)?;
        store.set_current(name)?;
        store.save(store_path)?;
        info!(context = name, "Current context changed");
        Ok(())
    }

    pub fn add_context(
        store_path: &Path,
        name: &str,
        options: &AddOptions,
    ) -> Result<AddResult, ApiError> {
        if name.is_empty() {
            return Err(ApiError::NoContextSpecified);
        }
        let mut store = ConfigStore::open(store_path)?;

        if options.policy == AddPolicy::Reject && store.contains(name) {
            return Err(ApiError::ContextExists(name.to_string()));
        }

        let record = build_record(options)?;
        let replaced = store.add_context(name, record).is_some();
        if replaced {
            warn!(context = name, "Overwriting existing context");
        }
        store.save(store_path)?;

        Ok(AddResult {
            name: name.to_string(),
            replaced,
        })
    }

    /// Remove every context matching `pattern`, asking per match.
    ///
    /// The current context is never removed. Changes are written once at the
    /// end, and only when something was removed outside of dry-run mode.
    pub fn remove_contexts(
        store_path: &Path,
        pattern: &str,
        options: RemoveOptions,
        prompt: &dyn ConfirmPrompt,
    ) -> Result<RemoveResult, ApiError> {
        if pattern.is_empty() {
            return Err(ApiError::NoContextSpecified);
        }
        let mut store = ConfigStore::open(store_path)?;
        if store.is_empty() {
            return Err(ApiError::NoContextsDefined);
        }

        let matched = matcher::match_names(pattern, store.contexts.keys())?;
        let mut result = RemoveResult {
            dry_run: options.dry_run,
            ..Default::default()
        };

        for name in &matched {
            if *name == store.current {
                warn!(context = %name, "Skipping removal of current context");
                result.skipped_current = Some(name.clone());
                continue;
            }

            if !options.no_confirm && !prompt.confirm(&format!("remove context {:?}?", name))? {
                result.declined.push(name.clone());
                continue;
            }

            store.remove_context(name);
            result.removed.push(name.clone());
        }
        result.matched = matched;

        if result.removed.is_empty() || options.dry_run {
            debug!(
                removed = result.removed.len(),
                dry_run = options.dry_run,
                "Not writing store"
            );
            return Ok(result);
        }

        store.save(store_path)?;
        result.saved = true;
        info!(removed = ?result.removed, "Contexts removed");
        Ok(result)
    }

    pub fn list_contexts(store_path: &Path) -> Result<ContextListResult, ApiError> {
        let store = ConfigStore::open(store_path)?;
        let contexts = store
            .contexts
            .iter()
            .map(|(name, record)| ContextListItem {
                name: name.clone(),
                current: *name == store.current,
                endpoints: record.endpoints.clone(),
                nodes: record.nodes.clone(),
            })
            .collect();
        Ok(ContextListResult {
            current: store.current.clone(),
            contexts,
        })
    }

    /// Import all contexts from `from_path`; colliding names are renamed.
    pub fn merge_from(store_path: &Path, from_path: &Path) -> Result<MergeResult, ApiError> {
        let mut store = ConfigStore::open(store_path)?;
        let source = ConfigStore::load(from_path)?;

        let renames = merge::merge(&mut store, &source);
        for rename in &renames {
            info!(%rename, "Renamed context while merging");
        }
        store.save(store_path)?;

        Ok(MergeResult {
            imported: source.len(),
            renames,
        })
    }

    /// Request fresh credentials and write them as a new single-context store.
    pub fn new_config(
        output_path: &Path,
        options: &NewConfigOptions,
        issuer: &dyn CredentialIssuer,
    ) -> Result<NewConfigResult, ApiError> {
        let nodes = issuer.target_nodes();
        if nodes.len() > 1 {
            return Err(ApiError::MultipleNodes(nodes.len()));
        }

        let (roles, unknown) = role::parse(&options.roles);
        if !unknown.is_empty() {
            return Err(ApiError::UnknownRoles(unknown.join(", ")));
        }

        if output_path.exists() {
            return Err(ApiError::StoreExists(output_path.to_path_buf()));
        }

        let request = ClientConfigRequest {
            roles: roles.strings(),
            crt_ttl: options.crt_ttl,
        };
        let payloads = issuer.generate_client_configuration(&request)?;
        let payload = match payloads.as_slice() {
            [payload] => payload,
            other => {
                return Err(ApiError::IntegrityViolation(format!(
                    "expected 1 message, got {}",
                    other.len()
                )))
            }
        };

        let mut store = ConfigStore::from_bytes(payload)?;
        let context = store.resolve_context_name(None)?.to_string();
        let endpoints = issuer.endpoints();
        store.resolve_context_mut(None)?.endpoints = endpoints.clone();
        store.save(output_path)?;

        info!(path = %output_path.display(), context = %context, "New config written");
        Ok(NewConfigResult {
            path: output_path.to_path_buf(),
            context,
            endpoints,
        })
    }

    /// Describe the selected context and its client certificate.
    pub fn info(
        store_path: &Path,
        context: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<InfoResult, ApiError> {
        let store = ConfigStore::open(store_path)?;
        let name = store.resolve_context_name(context)?;
        let record = store.resolve_context(Some(name))?;

        if !record.has_credentials() {
            return Err(ApiError::CertDecode(format!(
                "context {:?} has no client certificate",
                name
            )));
        }
        let cert_info = cert::inspect(&record.cert)?;
        let lifetime = cert_info.lifetime(now);
        if lifetime.is_past() {
            warn!(context = name, expired = %lifetime, "Client certificate has expired");
        }

        Ok(InfoResult {
            context: name.to_string(),
            nodes: record.nodes.clone(),
            endpoints: record.endpoints.clone(),
            roles: cert_info.roles.strings(),
            not_after: cert_info.not_after,
            lifetime,
        })
    }
}

fn trim_all(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.trim().to_string()).collect()
}

fn read_base64(what: &'static str, path: &Path) -> Result<String, ApiError> {
    let bytes = std::fs::read(path).map_err(|source| ApiError::InputFile {
        what,
        path: path.to_path_buf(),
        source,
    })?;
    Ok(STANDARD.encode(bytes))
}

fn build_record(options: &AddOptions) -> Result<ContextRecord, ApiError> {
    let ca = match &options.ca {
        Some(path) => read_base64("CA", path)?,
        None => String::new(),
    };

    let (cert, key) = match (&options.crt, &options.key) {
        (None, None) => (String::new(), String::new()),
        (Some(crt), Some(key)) => (
            read_base64("certificate", crt)?,
            read_base64("key", key)?,
        ),
        _ => {
            return Err(ApiError::InvalidArgument(
                "if either the 'crt' or 'key' flag is specified, both are required".to_string(),
            ))
        }
    };

    ContextRecord::from_parts(Vec::new(), Vec::new(), ca, cert, key)
}
