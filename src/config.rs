//! Configuration System
//!
//! Tool settings (where the store lives, how to log) layered from defaults,
//! the global config file and `CTXCONF__*` environment variables. This is the
//! tool's own configuration, not the context store it manages.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod merge_policy;
mod sources;

pub use sources::global_file::global_config_path;

/// Environment variable naming the store file; overrides the config file.
pub const STORE_ENV_VAR: &str = "CTXCONF_STORE";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Store file path (defaults to ~/.ctxconf/config)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from defaults, the global config file and the environment.
    pub fn load() -> Result<AppConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder);
        let builder = sources::environment::add_to_builder(builder);
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Load from defaults, an explicit file and the environment.
    pub fn load_from_file(path: &Path) -> Result<AppConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_file(builder, path);
        let builder = sources::environment::add_to_builder(builder);
        Ok(builder.build()?.try_deserialize()?)
    }
}

/// `~/.ctxconf/config`, if a home directory is known.
pub fn default_store_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".ctxconf").join("config"))
}

/// Store path precedence: CLI flag, `CTXCONF_STORE`, config file, default.
pub fn resolve_store_path(cli: Option<&Path>, config: &AppConfig) -> Result<PathBuf, ApiError> {
    select_store_path(
        cli,
        std::env::var(STORE_ENV_VAR).ok(),
        config,
        default_store_path(),
    )
}

fn select_store_path(
    cli: Option<&Path>,
    env: Option<String>,
    config: &AppConfig,
    default: Option<PathBuf>,
) -> Result<PathBuf, ApiError> {
    if let Some(path) = cli {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = env.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = &config.store.path {
        return Ok(path.clone());
    }
    default.ok_or_else(|| {
        ApiError::ConfigError(
            "cannot determine store path: no home directory, set --store or CTXCONF_STORE"
                .to_string(),
        )
    })
}
