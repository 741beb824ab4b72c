//! Helpers for GraphQL-over-HTTP responses, working on plain `serde_json`.

use serde_json::{json, Value};

/// Request body for a query with no variables.
pub fn body(query: &str) -> Value {
    json!({ "query": query })
}

/// Request body for a query with variables.
pub fn body_with_vars(query: &str, variables: Value) -> Value {
    json!({ "query": query, "variables": variables })
}

/// Assert the response has no `errors` and return its `data`.
pub fn expect_data(response: &Value) -> &Value {
    if let Some(errors) = response.get("errors") {
        panic!("expected no GraphQL errors, got {errors:#}");
    }
    response
        .get("data")
        .unwrap_or_else(|| panic!("response has no data: {response:#}"))
}

/// `extensions.code` of every error in the response, in order.
pub fn error_codes(response: &Value) -> Vec<String> {
    response
        .get("errors")
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.pointer("/extensions/code").and_then(Value::as_str))
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// Assert the response carries exactly one error, with the given code.
pub fn assert_single_error_code(response: &Value, expected_code: &str) {
    let codes = error_codes(response);
    assert_eq!(
        codes,
        vec![expected_code.to_string()],
        "unexpected errors in {response:#}"
    );
}
