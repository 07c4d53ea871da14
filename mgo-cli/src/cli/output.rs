// Copyright (c) 2024-2025 mgocli contributors
// SPDX-License-Identifier: MIT
//
//! Result preview rendering
//!
//! Renders the head of a result set as an aligned table. Row order is
//! whatever the server produced; no sorting is applied here.

use comfy_table::{Cell, Table};
use mgo_client::QueryResult;
use serde_json::Value;

/// Format the first `limit` rows of `result` as an aligned table with
/// column headers. An empty result renders a header-only table.
pub fn render(result: &QueryResult, limit: usize) -> String {
    let mut table = Table::new();
    table.set_header(result.columns.clone());

    for row in result.rows.iter().take(limit) {
        table.add_row(
            result
                .columns
                .iter()
                .map(|column| Cell::new(format_value(row.get(column))))
                .collect::<Vec<_>>(),
        );
    }

    table.to_string()
}

/// Display form of a single cell value. Strings render bare (no quotes),
/// missing columns and nulls render empty.
fn format_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
