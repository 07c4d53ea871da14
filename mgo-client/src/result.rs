//! Query result model for the Drill REST API
//!
//! Drill answers `POST /query.json` with a JSON document carrying a
//! `columns` array (column order as the planner produced it) and a `rows`
//! array of objects keyed by column name. Failed queries report an
//! `errorMessage` field instead. The whole payload is materialized into a
//! [`QueryResult`] before anything is rendered.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// A single result row, a mapping from column name to JSON value.
#[derive(Debug, Clone, Default)]
pub struct Row {
    pub values: serde_json::Map<String, Value>,
}

impl Row {
    /// Look up a column value by name.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }
}

/// A fully materialized result set, rows in server order.
#[derive(Debug, Clone, Default)]
pub struct QueryResult {
    /// Column names in the order the server reported them
    pub columns: Vec<String>,
    /// Result rows in the order the server produced them
    pub rows: Vec<Row>,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Raw shape of a `/query.json` response body.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<serde_json::Map<String, Value>>,
    #[serde(rename = "errorMessage")]
    error_message: Option<String>,
}

/// Decode a `/query.json` response body into a [`QueryResult`].
///
/// A body carrying `errorMessage` maps to [`Error::Query`] even when the
/// HTTP status was a success; Drill is not consistent about status codes
/// for planner failures.
pub fn parse_query_response(body: &str) -> Result<QueryResult> {
    let response: QueryResponse = serde_json::from_str(body)?;

    if let Some(message) = response.error_message {
        return Err(Error::Query(message));
    }

    let rows = response
        .rows
        .into_iter()
        .map(|values| Row { values })
        .collect();

    Ok(QueryResult {
        columns: response.columns,
        rows,
    })
}
