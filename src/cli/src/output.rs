//! Formatting helpers for CLI output.

use comfy_table::{ContentArrangement, Table};
use serde_json::Value;

/// Create a styled table with the given headers.
pub fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(comfy_table::presets::NOTHING);
    table.set_header(headers);
    table
}

/// Render a policy threshold as authored: numbers bare, strings quoted.
pub fn format_threshold(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{s}\""),
        other => other.to_string(),
    }
}

/// Render an acceptable-values list as `a | b | c`.
pub fn format_allowed(values: &[String]) -> String {
    if values.is_empty() {
        return "(nothing)".to_string();
    }
    values
        .iter()
        .map(|v| format!("\"{v}\""))
        .collect::<Vec<_>>()
        .join(" | ")
}
