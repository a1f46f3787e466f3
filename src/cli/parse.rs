//! CLI parse: clap types for ctxconf. No behavior beyond value parsing.

use crate::cli::complete::context_name_candidates;
use clap::{Parser, Subcommand};
use clap_complete::engine::ArgValueCandidates;
use std::path::PathBuf;
use std::time::Duration;

/// ctxconf CLI - manage client contexts (endpoints, nodes, credentials)
#[derive(Parser, Debug)]
#[command(name = "ctxconf")]
#[command(about = "Manage a multi-context client credential store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Store file path (overrides CTXCONF_STORE and the config file)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Context to operate on instead of the current one
    #[arg(long, global = true, add = ArgValueCandidates::new(context_name_candidates))]
    pub context: Option<String>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (when output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set the endpoints for the current context
    #[command(visible_alias = "endpoints")]
    Endpoint {
        #[arg(required = true, num_args = 1..)]
        endpoints: Vec<String>,
    },
    /// Set the target nodes for the current context
    #[command(visible_alias = "nodes")]
    Node {
        nodes: Vec<String>,
    },
    /// Set the current context
    #[command(visible_alias = "use-context")]
    Context {
        #[arg(add = ArgValueCandidates::new(context_name_candidates))]
        name: String,
    },
    /// Add a new context
    Add {
        name: String,
        /// The path to the CA certificate
        #[arg(long)]
        ca: Option<PathBuf>,
        /// The path to the certificate
        #[arg(long)]
        crt: Option<PathBuf>,
        /// The path to the key
        #[arg(long)]
        key: Option<PathBuf>,
        /// Fail instead of replacing an existing context
        #[arg(long)]
        fail_if_exists: bool,
    },
    /// Remove contexts matching a glob pattern
    Remove {
        #[arg(add = ArgValueCandidates::new(context_name_candidates))]
        pattern: String,
        /// Do not ask for confirmation
        #[arg(short = 'y', long)]
        noconfirm: bool,
        /// Show what would be removed without writing
        #[arg(long)]
        dry_run: bool,
    },
    /// List defined contexts
    #[command(visible_alias = "get-contexts")]
    Contexts {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Merge contexts from another store file
    Merge {
        from: PathBuf,
    },
    /// Generate a new client configuration file
    New {
        #[arg(default_value = "clientconfig")]
        path: PathBuf,
        /// Roles for the issued certificate
        #[arg(long, value_delimiter = ',', default_value = "os:admin")]
        roles: Vec<String>,
        /// Certificate time to live
        #[arg(long, value_parser = humantime::parse_duration, default_value = "87600h")]
        crt_ttl: Duration,
    },
    /// Show information about the current context
    Info,
}
