//! Context domain: user-facing commands over the store, plus the ports they
//! need from the outside (confirmation prompt, credential issuer).

pub mod commands;
pub mod issuer;
pub mod prompt;

pub use commands::{
    AddOptions, AddPolicy, AddResult, ContextCommandService, ContextListItem, ContextListResult,
    InfoResult, MergeResult, NewConfigOptions, NewConfigResult, RemoveOptions, RemoveResult,
    DEFAULT_CRT_TTL,
};
pub use issuer::{ClientConfigRequest, CredentialIssuer, UnavailableIssuer};
pub use prompt::{ConfirmPrompt, TerminalPrompt};
