//! CLI presentation: text and json formatters per command family.

mod context;
mod shared;

pub use context::{format_contexts_json, format_contexts_text, format_info_text};
pub use shared::{format_add_result, format_merge_result, format_new_config_result, format_remove_result};
