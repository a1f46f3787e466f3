//! Shared presentation: mutation command reports (add, remove, merge, new).

use crate::context::{AddResult, MergeResult, NewConfigResult, RemoveResult};

pub fn format_add_result(result: &AddResult) -> String {
    if result.replaced {
        format!("context {:?} replaced", result.name)
    } else {
        format!("context {:?} added", result.name)
    }
}

pub fn format_remove_result(result: &RemoveResult) -> String {
    let mut lines = Vec::new();
    if let Some(current) = &result.skipped_current {
        lines.push(format!(
            "skipping removal of current context {:?}, switch to another context first",
            current
        ));
    }
    let verb = if result.dry_run {
        "would remove"
    } else {
        "removed"
    };
    for name in &result.removed {
        lines.push(format!("{} context {:?}", verb, name));
    }
    for name in &result.declined {
        lines.push(format!("kept context {:?}", name));
    }
    if result.removed.is_empty() {
        lines.push("no contexts removed".to_string());
    } else if !result.saved {
        lines.push("dry run: no changes written".to_string());
    }
    lines.join("\n")
}

pub fn format_merge_result(result: &MergeResult) -> String {
    let mut lines: Vec<String> = result
        .renames
        .iter()
        .map(|rename| format!("renamed context {}", rename))
        .collect();
    lines.push(format!("merged {} context(s)", result.imported));
    lines.join("\n")
}

pub fn format_new_config_result(result: &NewConfigResult) -> String {
    let endpoints = if result.endpoints.is_empty() {
        "none".to_string()
    } else {
        result.endpoints.join(", ")
    };
    format!(
        "wrote {} (context {:?}, endpoints: {})",
        result.path.display(),
        result.context,
        endpoints
    )
}
