//! CLI route: single route table and run context. Dispatches to the context
//! command service and presentation.

use crate::config::{self, ConfigLoader};
use crate::context::{
    AddOptions, AddPolicy, ConfirmPrompt, ContextCommandService, CredentialIssuer,
    NewConfigOptions, RemoveOptions, TerminalPrompt, UnavailableIssuer,
};
use crate::error::ApiError;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info_span};

use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_add_result, format_contexts_json, format_contexts_text, format_info_text,
    format_merge_result, format_new_config_result, format_remove_result,
};
use crate::cli::{command_name, is_mutating};

/// Runtime context for CLI execution: store location, context override and
/// the interactive ports commands need.
pub struct RunContext {
    store_path: PathBuf,
    context_override: Option<String>,
    prompt: Box<dyn ConfirmPrompt>,
    issuer: Box<dyn CredentialIssuer>,
    now: Option<DateTime<Utc>>,
}

impl RunContext {
    /// Resolve the store path from the flag, environment and tool config.
    pub fn new(
        store: Option<PathBuf>,
        context_override: Option<String>,
        config_path: Option<PathBuf>,
    ) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        let store_path = config::resolve_store_path(store.as_deref(), &config)?;
        Ok(Self::with_store(store_path, context_override))
    }

    /// Run context for an explicit store file, with terminal prompt and no issuer.
    pub fn with_store(store_path: PathBuf, context_override: Option<String>) -> Self {
        Self {
            store_path,
            context_override,
            prompt: Box::new(TerminalPrompt),
            issuer: Box::new(UnavailableIssuer),
            now: None,
        }
    }

    pub fn with_prompt(mut self, prompt: Box<dyn ConfirmPrompt>) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn with_issuer(mut self, issuer: Box<dyn CredentialIssuer>) -> Self {
        self.issuer = issuer;
        self
    }

    /// Fix the clock used for certificate lifetimes.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let span = info_span!(
            "command",
            name = command_name(command),
            store = %self.store_path.display()
        );
        let _guard = span.enter();
        let started = Instant::now();

        let result = self.execute_inner(command);

        debug!(
            ok = result.is_ok(),
            mutating = is_mutating(command),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        let context = self.context_override.as_deref();
        match command {
            Commands::Endpoint { endpoints } => {
                ContextCommandService::set_endpoints(&self.store_path, context, endpoints)?;
                Ok(String::new())
            }
            Commands::Node { nodes } => {
                ContextCommandService::set_nodes(&self.store_path, context, nodes)?;
                Ok(String::new())
            }
            Commands::Context { name } => {
                ContextCommandService::use_context(&self.store_path, name)?;
                Ok(String::new())
            }
            Commands::Add {
                name,
                ca,
                crt,
                key,
                fail_if_exists,
            } => {
                let options = AddOptions {
                    ca: ca.clone(),
                    crt: crt.clone(),
                    key: key.clone(),
                    policy: if *fail_if_exists {
                        AddPolicy::Reject
                    } else {
                        AddPolicy::Overwrite
                    },
                };
                let result = ContextCommandService::add_context(&self.store_path, name, &options)?;
                Ok(format_add_result(&result))
            }
            Commands::Remove {
                pattern,
                noconfirm,
                dry_run,
            } => {
                let options = RemoveOptions {
                    no_confirm: *noconfirm,
                    dry_run: *dry_run,
                };
                let result = ContextCommandService::remove_contexts(
                    &self.store_path,
                    pattern,
                    options,
                    self.prompt.as_ref(),
                )?;
                Ok(format_remove_result(&result))
            }
            Commands::Contexts { format } => {
                let result = ContextCommandService::list_contexts(&self.store_path)?;
                match format.as_str() {
                    "json" => format_contexts_json(&result),
                    "text" => Ok(format_contexts_text(&result)),
                    other => Err(ApiError::InvalidArgument(format!(
                        "unknown output format {:?} (must be 'text' or 'json')",
                        other
                    ))),
                }
            }
            Commands::Merge { from } => {
                let result = ContextCommandService::merge_from(&self.store_path, from)?;
                Ok(format_merge_result(&result))
            }
            Commands::New {
                path,
                roles,
                crt_ttl,
            } => {
                let options = NewConfigOptions {
                    roles: roles.clone(),
                    crt_ttl: *crt_ttl,
                };
                let result =
                    ContextCommandService::new_config(path, &options, self.issuer.as_ref())?;
                Ok(format_new_config_result(&result))
            }
            Commands::Info => {
                let now = self.now.unwrap_or_else(Utc::now);
                let result = ContextCommandService::info(&self.store_path, context, now)?;
                Ok(format_info_text(&result))
            }
        }
    }
}
