//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; a single route table dispatches to the context service.

mod complete;
mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use complete::{candidates_for_store, context_name_candidates};
pub use help::{command_name, is_mutating};
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_add_result, format_contexts_json, format_contexts_text, format_info_text,
    format_merge_result, format_new_config_result, format_remove_result,
};
pub use route::RunContext;
