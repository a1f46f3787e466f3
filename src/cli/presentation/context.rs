//! Context presentation: listing (text/json) and info report.

use crate::context::{ContextListResult, InfoResult};
use crate::error::{ApiError, StorageError};
use comfy_table::presets::NOTHING;
use comfy_table::Table;

const MAX_LISTED_NODES: usize = 3;
const NOT_DEFINED: &str = "not defined";

pub fn format_contexts_text(result: &ContextListResult) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["CURRENT", "NAME", "ENDPOINTS", "NODES"]);
    for item in &result.contexts {
        let marker = if item.current { "*" } else { "" };
        table.add_row(vec![
            marker.to_string(),
            item.name.clone(),
            item.endpoints.join(","),
            abbreviate_nodes(&item.nodes),
        ]);
    }
    table.to_string()
}

pub fn format_contexts_json(result: &ContextListResult) -> Result<String, ApiError> {
    serde_json::to_string_pretty(result)
        .map_err(|e| ApiError::Storage(StorageError::Serialize(e.to_string())))
}

pub fn format_info_text(result: &InfoResult) -> String {
    format!(
        "Current context:     {}\nNodes:               {}\nEndpoints:           {}\nRoles:               {}\nCertificate expires: {} ({})",
        result.context,
        join_or_not_defined(&result.nodes),
        join_or_not_defined(&result.endpoints),
        join_or_not_defined(&result.roles),
        result.lifetime,
        result.not_after.format("%Y-%m-%d"),
    )
}

fn abbreviate_nodes(nodes: &[String]) -> String {
    if nodes.len() > MAX_LISTED_NODES {
        format!("{}...", nodes[..MAX_LISTED_NODES].join(","))
    } else {
        nodes.join(",")
    }
}

fn join_or_not_defined(values: &[String]) -> String {
    if values.is_empty() {
        NOT_DEFINED.to_string()
    } else {
        values.join(", ")
    }
}
