//! Decoding tests against realistic Drill REST payloads
//!
//! Payloads mirror what a Drillbit actually answers on /query.json,
//! including the string-typed cell values Drill emits for numbers.

use mgo_client::result::parse_query_response;
use mgo_client::Error;
use serde_json::Value;

const EMPLOYEE_PAYLOAD: &str = r#"{
    "queryId": "2b1a2f77-4b3c-9f1e-5d6a-7c8b9d0e1f2a",
    "columns": ["employee_id", "full_name", "salary"],
    "rows": [
        {"employee_id": "1", "full_name": "Sheri Nowmer", "salary": "80000.0"},
        {"employee_id": "2", "full_name": "Derrick Whelply", "salary": "40000.0"},
        {"employee_id": "4", "full_name": "Michael Spence", "salary": "40000.0"}
    ],
    "metadata": ["BIGINT", "VARCHAR", "FLOAT8"],
    "queryState": "COMPLETED",
    "attemptedAutoLimit": 0
}"#;

#[test]
fn decodes_a_completed_query() {
    let result = parse_query_response(EMPLOYEE_PAYLOAD).unwrap();

    assert_eq!(result.columns, vec!["employee_id", "full_name", "salary"]);
    assert_eq!(result.len(), 3);
    assert_eq!(
        result.rows[0].get("full_name"),
        Some(&Value::String("Sheri Nowmer".into()))
    );
    // Drill serializes numeric cells as strings; the client must not coerce
    assert_eq!(
        result.rows[2].get("salary"),
        Some(&Value::String("40000.0".into()))
    );
}

#[test]
fn decodes_a_planner_failure() {
    let payload = r#"{
        "errorMessage": "PARSE ERROR: Encountered \"slect\" at line 1, column 1.\n"
    }"#;

    match parse_query_response(payload) {
        Err(Error::Query(message)) => assert!(message.contains("PARSE ERROR")),
        other => panic!("expected query error, got {:?}", other),
    }
}

#[test]
fn tolerates_unknown_top_level_fields() {
    let payload = r#"{"columns": ["n"], "rows": [{"n": "1"}], "somethingNew": true}"#;
    let result = parse_query_response(payload).unwrap();
    assert_eq!(result.len(), 1);
}
