//! ctxconf: multi-context client credential store
//!
//! Keeps named contexts (endpoints, target nodes, base64 PEM credentials) in a
//! single file with one current context, and provides the operations a CLI
//! needs on top of it: glob-based removal, collision-safe merging and client
//! certificate inspection.

pub mod cert;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod merge;
pub mod role;
pub mod store;
